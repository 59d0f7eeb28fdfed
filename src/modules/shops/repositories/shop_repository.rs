use async_trait::async_trait;
use sqlx::{FromRow, MySqlPool};

use crate::core::numeric::decimal_from_column;
use crate::core::Result;
use crate::modules::shops::models::ShopTaxSettings;

/// Source of per-shop tax configuration
#[async_trait]
pub trait ShopConfigStore: Send + Sync {
    /// Stored tax settings for `shop_id`. A shop with no record yields
    /// empty settings rather than an error.
    async fn fetch_tax_settings(&self, shop_id: &str) -> Result<ShopTaxSettings>;
}

/// MySQL-backed shop configuration store
pub struct MySqlShopConfigStore {
    pool: MySqlPool,
}

impl MySqlShopConfigStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ShopTaxRow {
    cgst_rate: Option<String>,
    sgst_rate: Option<String>,
    state: Option<String>,
}

impl From<ShopTaxRow> for ShopTaxSettings {
    fn from(row: ShopTaxRow) -> Self {
        Self {
            cgst_rate: decimal_from_column(non_blank(row.cgst_rate.as_deref())),
            sgst_rate: decimal_from_column(non_blank(row.sgst_rate.as_deref())),
            state: row.state.filter(|s| !s.trim().is_empty()),
        }
    }
}

// A blank rate on the shop record means "not configured"
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.filter(|s| !s.trim().is_empty())
}

#[async_trait]
impl ShopConfigStore for MySqlShopConfigStore {
    async fn fetch_tax_settings(&self, shop_id: &str) -> Result<ShopTaxSettings> {
        let row: Option<ShopTaxRow> = sqlx::query_as(
            r#"
            SELECT
                CAST(cgst_rate AS CHAR) AS cgst_rate,
                CAST(sgst_rate AS CHAR) AS sgst_rate,
                state
            FROM shops
            WHERE id = ?
            "#,
        )
        .bind(shop_id)
        .fetch_optional(&self.pool)
        .await?;

        if row.is_none() {
            tracing::warn!(shop_id, "No shop record found, using default tax rates");
        }

        Ok(row.map(ShopTaxSettings::from).unwrap_or_default())
    }
}
