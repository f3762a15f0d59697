use axum::{
    response::Json,
    routing::get,
    Router,
};
use catalog_service::db::ensure_catalog_tables;
use catalog_service::handlers::{self, AppState};
use catalog_service::{AppError, Config};
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;

// ============================================
// Documentation Routes
// ============================================

async fn openapi_json() -> Json<serde_json::Value> {
    use utoipa::OpenApi;
    Json(
        serde_json::to_value(catalog_service::openapi::ApiDoc::openapi())
            .unwrap_or_else(|_| serde_json::json!({})),
    )
}

async fn swagger_ui() -> axum::response::Html<&'static str> {
    axum::response::Html(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Catalog Service API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: "/openapi.json",
                dom_id: '#swagger-ui',
                deepLinking: true,
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                plugins: [
                    SwaggerUIBundle.plugins.DownloadUrl
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>"#,
    )
}

async fn docs() -> axum::response::Html<&'static str> {
    axum::response::Html(
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Catalog Service API</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
        .container { max-width: 600px; margin: 0 auto; background: white; padding: 40px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        h1 { color: #333; }
        a { display: block; margin: 15px 0; padding: 15px; background: #0d6efd; color: white; text-decoration: none; border-radius: 4px; }
        a:hover { background: #0b5ed7; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Catalog Service API</h1>
        <p>Choose your preferred documentation viewer:</p>
        <a href="/swagger-ui">Swagger UI (Interactive)</a>
        <a href="/openapi.json">OpenAPI JSON (Raw)</a>
    </div>
</body>
</html>"#,
    )
}

// ============================================
// Application Setup
// ============================================

fn build_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/health/ready", get(handlers::readiness_handler))
        .route("/openapi.json", get(openapi_json))
        .route("/swagger-ui", get(swagger_ui))
        .route("/docs", get(docs))
        // Trust-ranked product search
        .route("/api/v1/search", get(handlers::search_listings))
}

async fn init_db_pool(database_url: &str, max_connections: u32) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}

// ============================================
// Main Entry Point
// ============================================

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "catalog_service=debug,sqlx=warn".into()),
        )
        .init();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(AppError::Config)?;

    tracing::info!("Starting catalog-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Initialize database connection pool
    tracing::info!("Connecting to database...");
    let db = init_db_pool(&config.database.url, config.database.max_connections)
        .await
        .map_err(|e| AppError::Config(format!("Failed to connect to database: {e}")))?;

    tracing::info!("Database connection established");

    // Schema bootstrap is fatal on failure
    ensure_catalog_tables(&db)
        .await
        .map_err(|e| AppError::Config(format!("Failed to ensure catalog schema: {e}")))?;

    let state = AppState {
        db,
        product_limit: config.search.product_limit,
    };

    let app = build_router().with_state(state);

    let addr: SocketAddr = format!("{}:{}", config.app.host, config.app.port)
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid bind address: {e}")))?;

    tracing::info!("catalog-service listening on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}
