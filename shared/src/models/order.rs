//! Order Model

use super::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle states (wire values in Spanish)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[default]
    #[serde(rename = "Pendiente")]
    Pendiente,
    #[serde(rename = "Pagado")]
    Pagado,
    #[serde(rename = "En Preparación")]
    EnPreparacion,
    #[serde(rename = "Enviado")]
    Enviado,
    #[serde(rename = "Entregado")]
    Entregado,
    #[serde(rename = "Cancelado")]
    Cancelado,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pendiente => "Pendiente",
            OrderStatus::Pagado => "Pagado",
            OrderStatus::EnPreparacion => "En Preparación",
            OrderStatus::Enviado => "Enviado",
            OrderStatus::Entregado => "Entregado",
            OrderStatus::Cancelado => "Cancelado",
        }
    }

    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        match s {
            "Pendiente" => Ok(OrderStatus::Pendiente),
            "Pagado" => Ok(OrderStatus::Pagado),
            "En Preparación" => Ok(OrderStatus::EnPreparacion),
            "Enviado" => Ok(OrderStatus::Enviado),
            "Entregado" => Ok(OrderStatus::Entregado),
            "Cancelado" => Ok(OrderStatus::Cancelado),
            other => Err(ValidationError::new(format!(
                "estado de pedido inválido: {other}"
            ))),
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order entity with its items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub customer_address: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub notes: String,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A line within an order. `product_name` and `unit_price` are snapshots
/// taken from the product at creation time and never refreshed, so the
/// order keeps its history when the catalog changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub product_id: Option<i64>,
    pub product_name: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub subtotal: f64,
}

/// One requested line in an order-create payload. The snapshot fields are
/// filled in server-side; `unit_price` may be supplied to override the
/// catalog price (manual admin pricing).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemInput {
    pub product_id: i64,
    pub quantity: i64,
    pub unit_price: Option<f64>,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub customer_address: String,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub notes: String,
    pub items: Vec<OrderItemInput>,
}

impl OrderCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer_name.trim().is_empty() {
            return Err(ValidationError::new("el nombre del cliente es requerido"));
        }
        if self.items.is_empty() {
            return Err(ValidationError::new("el pedido debe tener al menos un item"));
        }
        for item in &self.items {
            if item.quantity <= 0 {
                return Err(ValidationError::new(
                    "la cantidad de cada item debe ser mayor a 0",
                ));
            }
        }
        Ok(())
    }
}

/// Row shape for the paginated order list (items not loaded)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: i64,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Contact/notes update payload (PUT); stock and totals are untouchable here
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OrderFieldsUpdate {
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_spanish_wire_values() {
        for s in [
            "Pendiente",
            "Pagado",
            "En Preparación",
            "Enviado",
            "Entregado",
            "Cancelado",
        ] {
            let parsed = OrderStatus::parse(s).unwrap();
            assert_eq!(parsed.as_str(), s);
            let json = serde_json::to_string(&parsed).unwrap();
            assert_eq!(json, format!("\"{s}\""));
        }
        assert!(OrderStatus::parse("Perdido").is_err());
    }

    #[test]
    fn default_status_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pendiente);
    }

    #[test]
    fn create_requires_customer_and_lines() {
        let mut order: OrderCreate = serde_json::from_value(serde_json::json!({
            "customer_name": "Juan Pérez",
            "items": [{"product_id": 1, "quantity": 2}]
        }))
        .unwrap();
        assert!(order.validate().is_ok());
        assert_eq!(order.status, OrderStatus::Pendiente);

        order.items[0].quantity = 0;
        assert!(order.validate().is_err());

        order.items.clear();
        assert!(order.validate().is_err());

        order.items.push(OrderItemInput {
            product_id: 1,
            quantity: 1,
            unit_price: None,
        });
        order.customer_name = " ".into();
        assert!(order.validate().is_err());
    }
}
