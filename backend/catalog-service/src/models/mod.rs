/// Data structures for the catalog: stored rows, pre-joined query results,
/// and the serialized search result types consumed by the presentation layer.
///
/// Wire types use camelCase field names to match the UI contract.
use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// Product row as stored in PostgreSQL
#[derive(Debug, Clone, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Listing row pre-joined with its retailer
#[derive(Debug, Clone, FromRow)]
pub struct ListingWithRetailerRow {
    pub id: Uuid,
    pub product_id: Uuid,
    pub price: f64,
    pub shipping_speed_days: i32,
    pub driver_error_rate: f64,
    pub url: String,
    pub in_stock: bool,
    pub retailer_id: Uuid,
    pub retailer_name: String,
    pub retailer_reputation_score: f64,
    pub retailer_reviews_count: i32,
    pub retailer_logo_url: Option<String>,
}

/// A product together with all of its listings, fully materialized.
/// This is the unit the catalog repository hands to the ranking pipeline;
/// there is no lazy relation traversal.
#[derive(Debug, Clone)]
pub struct ProductWithListings {
    pub product: ProductRow,
    pub listings: Vec<ListingWithRetailerRow>,
}

/// Product fields echoed inside each listing result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub category: Option<String>,
}

impl From<&ProductRow> for ProductSummary {
    fn from(row: &ProductRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            description: row.description.clone(),
            image_url: row.image_url.clone(),
            category: row.category.clone(),
        }
    }
}

/// Retailer fields echoed inside each listing result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailerSummary {
    pub id: Uuid,
    pub name: String,
    pub reputation_score: f64,
    pub reviews_count: i32,
    pub logo_url: Option<String>,
}

/// Derived per-listing score breakdown. Computed fresh per query and never
/// persisted; every field is an integer in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustScoreBreakdown {
    pub shipping_score: i32,
    pub reputation_score: i32,
    pub driver_score: i32,
    pub trust_score: i32,
}

/// One ranked search result: a listing joined with its product, retailer,
/// and trust score breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingResult {
    pub id: Uuid,
    pub price: f64,
    pub shipping_speed_days: i32,
    pub driver_error_rate: f64,
    pub url: String,
    pub in_stock: bool,
    pub product: ProductSummary,
    pub retailer: RetailerSummary,
    pub trust_score: i32,
    pub breakdown: TrustScoreBreakdown,
}
