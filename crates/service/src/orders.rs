use models::{parse_record, Order, Record};
use serde_json::Value;
use tracing::{info, instrument};

use crate::{errors::ServiceError, storage::StoreGateway};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub id: Option<String>,
    pub total: f64,
}

/// Reject empty carts first, then validate the full order and store it.
#[instrument(skip_all)]
pub async fn create_order(store: &StoreGateway, payload: Value) -> Result<OrderReceipt, ServiceError> {
    Order::ensure_items(&payload)?;
    let order: Order = parse_record(payload)?;
    let id = store.insert(Order::KIND, order.to_document()?).await?;
    info!(items = order.items.len(), total = order.total, stored = id.is_some(), "order accepted");
    Ok(OrderReceipt { id, total: order.total })
}
