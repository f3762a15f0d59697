// ============================================
// Ranking Pipeline
// ============================================
//
// Expands the pre-joined catalog into per-listing candidates, computes each
// one's trust score breakdown, filters by the minimum trust threshold, and
// produces a total order: trust score descending, price ascending on ties.
//
// Pure transformation over its input; no shared state, no await points.

use std::cmp::Ordering;

use tracing::{debug, info};

use crate::models::{ListingResult, ProductSummary, ProductWithListings, RetailerSummary};
use crate::services::trust_score::{calculate_trust_score, TrustSignals};

/// Score, filter, and order the catalog's listings.
///
/// `min_trust` is expected to be clamped to [0, 100] by the caller; the
/// threshold boundary is inclusive. Empty input or an empty result after
/// filtering is a valid outcome.
pub fn rank_listings(catalog: Vec<ProductWithListings>, min_trust: f64) -> Vec<ListingResult> {
    let mut results: Vec<ListingResult> = Vec::new();

    for entry in catalog {
        let product = ProductSummary::from(&entry.product);

        for listing in entry.listings {
            let breakdown = calculate_trust_score(&TrustSignals {
                shipping_speed_days: listing.shipping_speed_days as f64,
                reputation_score: listing.retailer_reputation_score,
                driver_error_rate: listing.driver_error_rate,
            });

            debug!(
                listing_id = %listing.id,
                trust_score = breakdown.trust_score,
                "Trust score computed"
            );

            results.push(ListingResult {
                id: listing.id,
                price: listing.price,
                shipping_speed_days: listing.shipping_speed_days,
                driver_error_rate: listing.driver_error_rate,
                url: listing.url,
                in_stock: listing.in_stock,
                product: product.clone(),
                retailer: RetailerSummary {
                    id: listing.retailer_id,
                    name: listing.retailer_name,
                    reputation_score: listing.retailer_reputation_score,
                    reviews_count: listing.retailer_reviews_count,
                    logo_url: listing.retailer_logo_url,
                },
                trust_score: breakdown.trust_score,
                breakdown,
            });
        }
    }

    let candidate_count = results.len();
    results.retain(|result| result.trust_score as f64 >= min_trust);

    // Stable sort: equal trust and equal price keep their original order
    results.sort_by(|a, b| {
        b.trust_score.cmp(&a.trust_score).then_with(|| {
            a.price
                .partial_cmp(&b.price)
                .unwrap_or(Ordering::Equal)
        })
    });

    info!(
        candidate_count = candidate_count,
        result_count = results.len(),
        min_trust = min_trust,
        "Ranking completed"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ListingWithRetailerRow, ProductRow};
    use chrono::Utc;
    use uuid::Uuid;

    fn test_product(name: &str) -> ProductRow {
        ProductRow {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            image_url: None,
            category: None,
            created_at: Utc::now(),
        }
    }

    fn test_listing(
        product_id: Uuid,
        price: f64,
        shipping_days: i32,
        reputation: f64,
        error_rate: f64,
    ) -> ListingWithRetailerRow {
        ListingWithRetailerRow {
            id: Uuid::new_v4(),
            product_id,
            price,
            shipping_speed_days: shipping_days,
            driver_error_rate: error_rate,
            url: "https://example.com/".to_string(),
            in_stock: true,
            retailer_id: Uuid::new_v4(),
            retailer_name: "Test Retailer".to_string(),
            retailer_reputation_score: reputation,
            retailer_reviews_count: 100,
            retailer_logo_url: None,
        }
    }

    fn catalog_entry(listings: Vec<ListingWithRetailerRow>) -> ProductWithListings {
        let product = test_product("Test Product");
        let listings = listings
            .into_iter()
            .map(|mut l| {
                l.product_id = product.id;
                l
            })
            .collect();
        ProductWithListings { product, listings }
    }

    #[test]
    fn test_orders_by_trust_score_descending() {
        let product = test_product("Headphones");
        let fast = test_listing(product.id, 249.99, 2, 4.6, 0.04);
        let slow = test_listing(product.id, 199.99, 5, 4.1, 0.08);
        let fast_id = fast.id;

        let ranked = rank_listings(
            vec![ProductWithListings {
                product,
                listings: vec![slow, fast],
            }],
            0.0,
        );

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, fast_id);
        assert_eq!(ranked[0].trust_score, 87);
        assert_eq!(ranked[1].trust_score, 61);
    }

    #[test]
    fn test_ties_break_by_ascending_price() {
        // Identical signals, different prices: cheaper first
        let expensive = test_listing(Uuid::nil(), 300.0, 3, 4.5, 0.05);
        let cheap = test_listing(Uuid::nil(), 100.0, 3, 4.5, 0.05);
        let cheap_id = cheap.id;

        let ranked = rank_listings(vec![catalog_entry(vec![expensive, cheap])], 0.0);

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].id, cheap_id);
        assert!(ranked[0].price < ranked[1].price);
        assert_eq!(ranked[0].trust_score, ranked[1].trust_score);
    }

    #[test]
    fn test_equal_trust_and_price_keeps_original_order() {
        let first = test_listing(Uuid::nil(), 100.0, 3, 4.5, 0.05);
        let second = test_listing(Uuid::nil(), 100.0, 3, 4.5, 0.05);
        let first_id = first.id;
        let second_id = second.id;

        let ranked = rank_listings(vec![catalog_entry(vec![first, second])], 0.0);

        assert_eq!(ranked[0].id, first_id);
        assert_eq!(ranked[1].id, second_id);
    }

    #[test]
    fn test_threshold_boundary_is_inclusive() {
        // 2 days / 4.6 stars / 4% scores exactly 87
        let listing = test_listing(Uuid::nil(), 249.99, 2, 4.6, 0.04);

        let kept = rank_listings(vec![catalog_entry(vec![listing.clone()])], 87.0);
        assert_eq!(kept.len(), 1);

        let dropped = rank_listings(vec![catalog_entry(vec![listing])], 88.0);
        assert!(dropped.is_empty());
    }

    #[test]
    fn test_raising_threshold_never_grows_results() {
        let listings = vec![
            test_listing(Uuid::nil(), 249.99, 2, 4.6, 0.04),
            test_listing(Uuid::nil(), 199.99, 5, 4.1, 0.08),
            test_listing(Uuid::nil(), 99.99, 7, 2.0, 0.18),
        ];

        let mut previous = usize::MAX;
        for threshold in [0.0, 25.0, 50.0, 75.0, 100.0] {
            let count =
                rank_listings(vec![catalog_entry(listings.clone())], threshold).len();
            assert!(count <= previous);
            previous = count;
        }
    }

    #[test]
    fn test_zero_threshold_keeps_everything() {
        let listings = vec![
            test_listing(Uuid::nil(), 249.99, 2, 4.6, 0.04),
            test_listing(Uuid::nil(), 99.99, 7, 0.0, 0.20),
        ];
        let ranked = rank_listings(vec![catalog_entry(listings)], 0.0);
        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_empty_catalog_yields_empty_results() {
        assert!(rank_listings(Vec::new(), 0.0).is_empty());
    }

    #[test]
    fn test_product_without_listings_contributes_nothing() {
        let entry = ProductWithListings {
            product: test_product("Orphan Product"),
            listings: Vec::new(),
        };
        assert!(rank_listings(vec![entry], 0.0).is_empty());
    }

    #[test]
    fn test_perfect_threshold_with_no_perfect_listing() {
        let listing = test_listing(Uuid::nil(), 249.99, 2, 4.6, 0.04);
        let ranked = rank_listings(vec![catalog_entry(vec![listing])], 100.0);
        assert!(ranked.is_empty());
    }
}
