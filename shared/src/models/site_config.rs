//! Site Configuration Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Global store configuration, a single row created with defaults on
/// first read.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SiteConfig {
    pub id: i64,
    pub store_name: String,
    pub description: String,
    pub logo_url: String,
    pub whatsapp_number: String,
    pub whatsapp_message: String,
    pub credit_card_surcharge: f64,
    pub low_stock_threshold: i64,
    pub enable_stock_alerts: bool,
    pub enable_order_alerts: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update config payload, full replacement of the editable fields
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfigUpdate {
    pub store_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub logo_url: String,
    #[serde(default)]
    pub whatsapp_number: String,
    #[serde(default)]
    pub whatsapp_message: String,
    #[serde(default)]
    pub credit_card_surcharge: f64,
    #[serde(default)]
    pub low_stock_threshold: i64,
    #[serde(default)]
    pub enable_stock_alerts: bool,
    #[serde(default)]
    pub enable_order_alerts: bool,
}

impl SiteConfig {
    /// Defaults used when the singleton row does not exist yet.
    pub fn defaults(now: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            store_name: "Cerro Sneakers".to_string(),
            description: "Especialistas en sneakers de edición limitada y calzado premium."
                .to_string(),
            logo_url: String::new(),
            whatsapp_number: "5491134567890".to_string(),
            whatsapp_message: "Hola! Me interesa este producto...".to_string(),
            credit_card_surcharge: 15.0,
            low_stock_threshold: 5,
            enable_stock_alerts: true,
            enable_order_alerts: true,
            created_at: now,
            updated_at: now,
        }
    }
}
