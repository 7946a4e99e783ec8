use models::RecordKind;
use mongodb::bson::doc;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::{normalize, storage::StoreGateway};

pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Store,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct ProductListing {
    pub items: Vec<Value>,
    pub source: ListingSource,
}

/// Missing limit → 20; otherwise clamped into `1..=100`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Shown whenever the store has nothing to offer.
pub fn sample_products() -> Vec<Value> {
    vec![
        json!({
            "sku": "HIDE-PRM-210",
            "title": "HIDE Handmade Gyuto 210mm",
            "description": "Gyuto chef knife forged by artisan Shuichi Isayazaka. Aogami super core, stainless clad.",
            "price": 38500,
            "category": "Knife",
            "in_stock": true,
            "image": "/knife-gyuto.jpg"
        }),
        json!({
            "sku": "HIDE-PET-150",
            "title": "HIDE Petty 150mm",
            "description": "Compact petty knife for precise work. Hand-ground, octagonal handle.",
            "price": 19800,
            "category": "Knife",
            "in_stock": true,
            "image": "/knife-petty.jpg"
        }),
    ]
}

/// Products from the store with ids normalized, or the sample list when
/// the store is unconfigured, empty or failing. Never errors.
pub async fn list_products(store: &StoreGateway, limit: Option<i64>) -> ProductListing {
    let limit = clamp_limit(limit);
    match store.find(RecordKind::Product, doc! {}, limit).await {
        Ok(docs) if !docs.is_empty() => {
            info!(count = docs.len(), limit, "listed products from store");
            ProductListing {
                items: docs.into_iter().map(normalize::to_json).collect(),
                source: ListingSource::Store,
            }
        }
        Ok(_) => fallback(),
        Err(e) => {
            warn!(error = %e, "product query failed; serving sample products");
            fallback()
        }
    }
}

fn fallback() -> ProductListing {
    ProductListing { items: sample_products(), source: ListingSource::Fallback }
}
