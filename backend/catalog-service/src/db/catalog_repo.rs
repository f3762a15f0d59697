/// Catalog repository: products pre-joined with their listings and each
/// listing's retailer, ready for the ranking pipeline.
use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::{ListingWithRetailerRow, ProductRow, ProductWithListings};

/// Fetch up to `product_limit` products, optionally filtered by a
/// case-insensitive substring match on product name. An empty query matches
/// all products. Each product comes back with its listings joined to their
/// retailer; a product with no listings has an empty listings vec.
pub async fn fetch_catalog(
    pool: &PgPool,
    query: &str,
    product_limit: i64,
) -> Result<Vec<ProductWithListings>, sqlx::Error> {
    let query = query.trim();

    let products = if query.is_empty() {
        sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, image_url, category, created_at
            FROM products
            ORDER BY created_at ASC
            LIMIT $1
            "#,
        )
        .bind(product_limit)
        .fetch_all(pool)
        .await?
    } else {
        let search_pattern = format!("%{}%", query);
        sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, image_url, category, created_at
            FROM products
            WHERE name ILIKE $1
            ORDER BY created_at ASC
            LIMIT $2
            "#,
        )
        .bind(&search_pattern)
        .bind(product_limit)
        .fetch_all(pool)
        .await?
    };

    if products.is_empty() {
        return Ok(Vec::new());
    }

    let product_ids: Vec<Uuid> = products.iter().map(|p| p.id).collect();

    let listings = sqlx::query_as::<_, ListingWithRetailerRow>(
        r#"
        SELECT l.id, l.product_id, l.price, l.shipping_speed_days,
               l.driver_error_rate, l.url, l.in_stock,
               r.id AS retailer_id,
               r.name AS retailer_name,
               r.reputation_score AS retailer_reputation_score,
               r.reviews_count AS retailer_reviews_count,
               r.logo_url AS retailer_logo_url
        FROM listings l
        JOIN retailers r ON r.id = l.retailer_id
        WHERE l.product_id = ANY($1)
        ORDER BY l.created_at ASC
        "#,
    )
    .bind(&product_ids)
    .fetch_all(pool)
    .await?;

    let mut listings_by_product: HashMap<Uuid, Vec<ListingWithRetailerRow>> = HashMap::new();
    for listing in listings {
        listings_by_product
            .entry(listing.product_id)
            .or_default()
            .push(listing);
    }

    Ok(products
        .into_iter()
        .map(|product| {
            let listings = listings_by_product.remove(&product.id).unwrap_or_default();
            ProductWithListings { product, listings }
        })
        .collect())
}
