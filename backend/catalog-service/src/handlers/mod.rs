/// HTTP request handlers and shared application state
pub mod health;
pub mod search;

use sqlx::PgPool;

pub use health::{health_handler, readiness_handler};
pub use search::search_listings;

/// Shared handler state: the read-only catalog pool handle, opened at
/// process start, plus search tuning.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub product_limit: i64,
}
