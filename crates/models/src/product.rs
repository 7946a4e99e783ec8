use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{kind::RecordKind, record::Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price in JPY.
    #[validate(range(min = 0.0))]
    pub price: f64,
    pub category: String,
    #[serde(default = "default_true")]
    pub in_stock: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Record for Product {
    const KIND: RecordKind = RecordKind::Product;
}

pub(crate) fn default_true() -> bool { true }
