/// Idempotent schema bootstrap for the catalog tables.
///
/// Executed once at process start; failure here is fatal.
use sqlx::PgPool;
use tracing::info;

pub async fn ensure_catalog_tables(pool: &PgPool) -> Result<(), sqlx::Error> {
    info!("Ensuring catalog tables exist");

    sqlx::query(RETAILERS_TABLE).execute(pool).await?;
    sqlx::query(PRODUCTS_TABLE).execute(pool).await?;
    sqlx::query(LISTINGS_TABLE).execute(pool).await?;

    Ok(())
}

const RETAILERS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS retailers (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    reputation_score DOUBLE PRECISION NOT NULL,
    reviews_count INTEGER NOT NULL DEFAULT 0,
    logo_url TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    image_url TEXT,
    category TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;

const LISTINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS listings (
    id UUID PRIMARY KEY,
    product_id UUID NOT NULL REFERENCES products(id) ON DELETE CASCADE,
    retailer_id UUID NOT NULL REFERENCES retailers(id) ON DELETE CASCADE,
    price DOUBLE PRECISION NOT NULL CHECK (price > 0),
    shipping_speed_days INTEGER NOT NULL CHECK (shipping_speed_days > 0),
    driver_error_rate DOUBLE PRECISION NOT NULL CHECK (driver_error_rate >= 0 AND driver_error_rate <= 1),
    url TEXT NOT NULL,
    in_stock BOOLEAN NOT NULL DEFAULT TRUE,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
)
"#;
