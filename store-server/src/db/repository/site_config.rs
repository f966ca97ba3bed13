//! Site Configuration Repository
//!
//! The table holds a single row; the first read creates it with the
//! store defaults.

use super::{RepoError, RepoResult};
use shared::models::{SiteConfig, SiteConfigUpdate};
use shared::util::now;
use sqlx::SqlitePool;

const CONFIG_COLUMNS: &str = "id, store_name, description, logo_url, whatsapp_number, \
     whatsapp_message, credit_card_surcharge, low_stock_threshold, enable_stock_alerts, \
     enable_order_alerts, created_at, updated_at";

pub async fn get_or_create(pool: &SqlitePool) -> RepoResult<SiteConfig> {
    let existing = sqlx::query_as::<_, SiteConfig>(&format!(
        "SELECT {CONFIG_COLUMNS} FROM site_configs ORDER BY id ASC LIMIT 1"
    ))
    .fetch_optional(pool)
    .await?;

    if let Some(config) = existing {
        return Ok(config);
    }

    let defaults = SiteConfig::defaults(now());
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO site_configs (store_name, description, logo_url, whatsapp_number, \
         whatsapp_message, credit_card_surcharge, low_stock_threshold, enable_stock_alerts, \
         enable_order_alerts, created_at, updated_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&defaults.store_name)
    .bind(&defaults.description)
    .bind(&defaults.logo_url)
    .bind(&defaults.whatsapp_number)
    .bind(&defaults.whatsapp_message)
    .bind(defaults.credit_card_surcharge)
    .bind(defaults.low_stock_threshold)
    .bind(defaults.enable_stock_alerts)
    .bind(defaults.enable_order_alerts)
    .bind(defaults.created_at)
    .bind(defaults.updated_at)
    .fetch_one(pool)
    .await?;
    tracing::info!("Default site configuration created");

    Ok(SiteConfig { id, ..defaults })
}

pub async fn update(pool: &SqlitePool, data: &SiteConfigUpdate) -> RepoResult<()> {
    // Make sure the singleton exists before updating it
    let current = get_or_create(pool).await?;

    let rows = sqlx::query(
        "UPDATE site_configs SET store_name = ?, description = ?, logo_url = ?, \
         whatsapp_number = ?, whatsapp_message = ?, credit_card_surcharge = ?, \
         low_stock_threshold = ?, enable_stock_alerts = ?, enable_order_alerts = ?, \
         updated_at = ? WHERE id = ?",
    )
    .bind(&data.store_name)
    .bind(&data.description)
    .bind(&data.logo_url)
    .bind(&data.whatsapp_number)
    .bind(&data.whatsapp_message)
    .bind(data.credit_card_surcharge)
    .bind(data.low_stock_threshold)
    .bind(data.enable_stock_alerts)
    .bind(data.enable_order_alerts)
    .bind(now())
    .bind(current.id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::Database(
            "Failed to update site configuration".into(),
        ));
    }
    Ok(())
}
