/// Catalog Service Library
///
/// Serves product search results ranked by a computed Trust Score that blends
/// shipping speed, retailer reputation, and historical delivery risk.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers for search and health endpoints
/// - `models`: Data structures for products, retailers, listings, and results
/// - `services`: Trust score computation and the ranking pipeline
/// - `db`: Database access layer and schema bootstrap
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
