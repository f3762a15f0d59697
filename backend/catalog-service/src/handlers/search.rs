/// Search handler - the trust-ranked product search endpoint
use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::db::catalog_repo;
use crate::error::AppError;
use crate::handlers::AppState;
use crate::models::ListingResult;
use crate::services::ranking;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text product name filter; empty means all products
    #[serde(default)]
    pub q: String,
    /// Minimum trust threshold. Kept as a raw string so non-numeric input
    /// falls back to 0 instead of failing deserialization.
    #[serde(default, alias = "minTrust")]
    pub min_trust: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<ListingResult>,
    pub count: usize,
}

/// GET /api/v1/search
///
/// Fetches matching products with their listings, runs the ranking pipeline,
/// and returns the ordered results. A query matching nothing, or a threshold
/// no listing reaches, yields an empty result list with HTTP 200.
pub async fn search_listings(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let min_trust = parse_min_trust(params.min_trust.as_deref());

    let catalog = catalog_repo::fetch_catalog(&state.db, &params.q, state.product_limit).await?;

    let results = ranking::rank_listings(catalog, min_trust);
    let count = results.len();

    Ok(Json(SearchResponse {
        query: params.q,
        results,
        count,
    }))
}

/// Non-numeric or missing thresholds silently fall back to 0; numeric values
/// are clamped to [0, 100].
fn parse_min_trust(raw: Option<&str>) -> f64 {
    raw.and_then(|value| value.trim().parse::<f64>().ok())
        .map(|value| value.clamp(0.0, 100.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_threshold_defaults_to_zero() {
        assert_eq!(parse_min_trust(None), 0.0);
    }

    #[test]
    fn test_non_numeric_threshold_falls_back_to_zero() {
        assert_eq!(parse_min_trust(Some("abc")), 0.0);
        assert_eq!(parse_min_trust(Some("")), 0.0);
        assert_eq!(parse_min_trust(Some("12x")), 0.0);
    }

    #[test]
    fn test_numeric_threshold_is_clamped() {
        assert_eq!(parse_min_trust(Some("50")), 50.0);
        assert_eq!(parse_min_trust(Some("150")), 100.0);
        assert_eq!(parse_min_trust(Some("-10")), 0.0);
    }

    #[test]
    fn test_fractional_threshold_is_accepted() {
        assert_eq!(parse_min_trust(Some("62.5")), 62.5);
    }
}
