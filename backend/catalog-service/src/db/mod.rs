pub mod catalog_repo;
pub mod schema;

pub use schema::ensure_catalog_tables;
