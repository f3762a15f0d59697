/// Seed the catalog database with the demo dataset.
///
/// Wipes existing catalog rows and inserts the reference retailers, products,
/// and listings. A listing naming a missing product or retailer is a
/// precondition violation and aborts the run.
///
/// Usage:
///   DATABASE_URL=postgres://... cargo run --bin seed
use std::collections::HashMap;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use catalog_service::db::ensure_catalog_tables;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

struct RetailerSeed {
    name: &'static str,
    reputation_score: f64,
    reviews_count: i32,
    logo_url: &'static str,
}

struct ProductSeed {
    name: &'static str,
    description: &'static str,
    image_url: &'static str,
    category: &'static str,
}

struct ListingSeed {
    product_name: &'static str,
    retailer_name: &'static str,
    price: f64,
    shipping_speed_days: i32,
    driver_error_rate: f64,
    url: &'static str,
}

const RETAILERS: &[RetailerSeed] = &[
    RetailerSeed {
        name: "Amazon",
        reputation_score: 4.6,
        reviews_count: 182_340,
        logo_url: "https://logo.clearbit.com/amazon.com",
    },
    RetailerSeed {
        name: "Best Buy",
        reputation_score: 4.3,
        reviews_count: 42_310,
        logo_url: "https://logo.clearbit.com/bestbuy.com",
    },
    RetailerSeed {
        name: "Walmart",
        reputation_score: 4.1,
        reviews_count: 92_210,
        logo_url: "https://logo.clearbit.com/walmart.com",
    },
    RetailerSeed {
        name: "Target",
        reputation_score: 4.4,
        reviews_count: 56_320,
        logo_url: "https://logo.clearbit.com/target.com",
    },
];

const PRODUCTS: &[ProductSeed] = &[
    ProductSeed {
        name: "Noise-Cancelling Headphones",
        description: "Wireless over-ear headphones with active noise cancellation.",
        image_url: "https://images.unsplash.com/photo-1518441985310-008862d2f165?auto=format&fit=crop&w=800&q=80",
        category: "Audio",
    },
    ProductSeed {
        name: "14-inch Ultrabook Laptop",
        description: "Lightweight productivity laptop with 16GB RAM and 512GB SSD.",
        image_url: "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?auto=format&fit=crop&w=800&q=80",
        category: "Computers",
    },
    ProductSeed {
        name: "Smartwatch Pro",
        description: "Health tracking smartwatch with GPS and 3-day battery.",
        image_url: "https://images.unsplash.com/photo-1523275335684-37898b6baf30?auto=format&fit=crop&w=800&q=80",
        category: "Wearables",
    },
    ProductSeed {
        name: "Smart Home Speaker",
        description: "Voice-enabled smart speaker with room-filling sound.",
        image_url: "https://images.unsplash.com/photo-1518441985310-008862d2f165?auto=format&fit=crop&w=800&q=80",
        category: "Home",
    },
];

const LISTINGS: &[ListingSeed] = &[
    ListingSeed {
        product_name: "Noise-Cancelling Headphones",
        retailer_name: "Amazon",
        price: 249.99,
        shipping_speed_days: 2,
        driver_error_rate: 0.04,
        url: "https://amazon.com/",
    },
    ListingSeed {
        product_name: "Noise-Cancelling Headphones",
        retailer_name: "Best Buy",
        price: 229.99,
        shipping_speed_days: 4,
        driver_error_rate: 0.06,
        url: "https://bestbuy.com/",
    },
    ListingSeed {
        product_name: "Noise-Cancelling Headphones",
        retailer_name: "Target",
        price: 239.0,
        shipping_speed_days: 3,
        driver_error_rate: 0.05,
        url: "https://target.com/",
    },
    ListingSeed {
        product_name: "14-inch Ultrabook Laptop",
        retailer_name: "Amazon",
        price: 1199.0,
        shipping_speed_days: 2,
        driver_error_rate: 0.03,
        url: "https://amazon.com/",
    },
    ListingSeed {
        product_name: "14-inch Ultrabook Laptop",
        retailer_name: "Best Buy",
        price: 1149.0,
        shipping_speed_days: 3,
        driver_error_rate: 0.05,
        url: "https://bestbuy.com/",
    },
    ListingSeed {
        product_name: "14-inch Ultrabook Laptop",
        retailer_name: "Walmart",
        price: 1099.0,
        shipping_speed_days: 5,
        driver_error_rate: 0.08,
        url: "https://walmart.com/",
    },
    ListingSeed {
        product_name: "Smartwatch Pro",
        retailer_name: "Target",
        price: 329.0,
        shipping_speed_days: 3,
        driver_error_rate: 0.04,
        url: "https://target.com/",
    },
    ListingSeed {
        product_name: "Smartwatch Pro",
        retailer_name: "Walmart",
        price: 309.0,
        shipping_speed_days: 4,
        driver_error_rate: 0.07,
        url: "https://walmart.com/",
    },
    ListingSeed {
        product_name: "Smart Home Speaker",
        retailer_name: "Amazon",
        price: 129.0,
        shipping_speed_days: 1,
        driver_error_rate: 0.02,
        url: "https://amazon.com/",
    },
    ListingSeed {
        product_name: "Smart Home Speaker",
        retailer_name: "Best Buy",
        price: 139.0,
        shipping_speed_days: 3,
        driver_error_rate: 0.05,
        url: "https://bestbuy.com/",
    },
];

async fn wipe_catalog(pool: &PgPool) -> Result<()> {
    // Listings first to satisfy foreign keys
    sqlx::query("DELETE FROM listings")
        .execute(pool)
        .await
        .context("Failed to delete listings")?;
    sqlx::query("DELETE FROM products")
        .execute(pool)
        .await
        .context("Failed to delete products")?;
    sqlx::query("DELETE FROM retailers")
        .execute(pool)
        .await
        .context("Failed to delete retailers")?;

    Ok(())
}

async fn insert_retailers(pool: &PgPool) -> Result<HashMap<&'static str, Uuid>> {
    let mut ids = HashMap::new();

    for retailer in RETAILERS {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO retailers (id, name, reputation_score, reviews_count, logo_url)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(retailer.name)
        .bind(retailer.reputation_score)
        .bind(retailer.reviews_count)
        .bind(retailer.logo_url)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert retailer '{}'", retailer.name))?;

        ids.insert(retailer.name, id);
    }

    Ok(ids)
}

async fn insert_products(pool: &PgPool) -> Result<HashMap<&'static str, Uuid>> {
    let mut ids = HashMap::new();

    for product in PRODUCTS {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, image_url, category)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(product.name)
        .bind(product.description)
        .bind(product.image_url)
        .bind(product.category)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to insert product '{}'", product.name))?;

        ids.insert(product.name, id);
    }

    Ok(ids)
}

async fn insert_listings(
    pool: &PgPool,
    product_ids: &HashMap<&'static str, Uuid>,
    retailer_ids: &HashMap<&'static str, Uuid>,
) -> Result<usize> {
    let mut inserted = 0usize;

    for listing in LISTINGS {
        let Some(product_id) = product_ids.get(listing.product_name) else {
            bail!(
                "Missing product '{}' for listing seed",
                listing.product_name
            );
        };
        let Some(retailer_id) = retailer_ids.get(listing.retailer_name) else {
            bail!(
                "Missing retailer '{}' for listing seed",
                listing.retailer_name
            );
        };

        sqlx::query(
            r#"
            INSERT INTO listings
                (id, product_id, retailer_id, price, shipping_speed_days,
                 driver_error_rate, url, in_stock)
            VALUES ($1, $2, $3, $4, $5, $6, $7, TRUE)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(*product_id)
        .bind(*retailer_id)
        .bind(listing.price)
        .bind(listing.shipping_speed_days)
        .bind(listing.driver_error_rate)
        .bind(listing.url)
        .execute(pool)
        .await
        .with_context(|| {
            format!(
                "Failed to insert listing '{}' at '{}'",
                listing.product_name, listing.retailer_name
            )
        })?;

        inserted += 1;
    }

    Ok(inserted)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seed=info,sqlx=warn".into()),
        )
        .init();

    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .context("DATABASE_URL environment variable not set")?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    ensure_catalog_tables(&pool)
        .await
        .context("Failed to ensure catalog schema")?;

    info!("Wiping existing catalog rows");
    wipe_catalog(&pool).await?;

    let retailer_ids = insert_retailers(&pool).await?;
    let product_ids = insert_products(&pool).await?;
    let listing_count = insert_listings(&pool, &product_ids, &retailer_ids).await?;

    info!(
        retailers = retailer_ids.len(),
        products = product_ids.len(),
        listings = listing_count,
        "Catalog seed completed"
    );

    Ok(())
}
