use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::{errors::ModelError, kind::RecordKind, record::Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    pub sku: String,
    /// Title at time of purchase.
    pub title: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(length(min = 1, message = "No items provided"), nested)]
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    #[validate(email)]
    pub customer_email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Client-supplied; not checked against the item sum.
    #[validate(range(min = 0.0))]
    pub total: f64,
}

impl Record for Order {
    const KIND: RecordKind = RecordKind::Order;
}

fn default_currency() -> String { "JPY".into() }

impl Order {
    /// Reject a payload without items before any schema work, so an empty
    /// cart is reported as such even when other fields are missing.
    pub fn ensure_items(payload: &Value) -> Result<(), ModelError> {
        match payload.get("items").and_then(Value::as_array) {
            Some(items) if !items.is_empty() => Ok(()),
            _ => Err(ModelError::EmptyOrder),
        }
    }
}
