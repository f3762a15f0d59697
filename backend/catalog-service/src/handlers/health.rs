/// Health check handlers
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::handlers::AppState;

/// GET /health - liveness
pub async fn health_handler() -> &'static str {
    "OK"
}

/// GET /health/ready - readiness, verifies the database connection
pub async fn readiness_handler(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").fetch_one(&state.db).await {
        Ok(_) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "service": "catalog-service",
                "version": env!("CARGO_PKG_VERSION"),
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(serde_json::json!({
                "status": "unhealthy",
                "error": format!("PostgreSQL connection failed: {}", e),
                "service": "catalog-service",
            })),
        ),
    }
}
