/// Error types for the catalog service.
///
/// The scoring and ranking functions cannot fail; all error handling lives
/// at the data-access and configuration boundaries.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

/// Result type for catalog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            // Catalog access failures surface as a single user-visible
            // message; no partial results, no retry.
            AppError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "unable to load listings",
            ),
            AppError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };

        tracing::error!(error = %self, "Request failed");

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
