/// OpenAPI documentation for the Catalog Service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog Service API",
        version = "1.0.0",
        description = "Product search with trust-ranked listings blending shipping speed, retailer reputation, and delivery risk",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development server"),
    ),
    tags(
        (name = "Health", description = "Service health checks"),
        (name = "Search", description = "Trust-ranked product search"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    pub fn title() -> &'static str {
        "Catalog Service"
    }

    pub fn version() -> &'static str {
        "1.0.0"
    }

    pub fn openapi_json_path() -> &'static str {
        "/openapi.json"
    }
}
