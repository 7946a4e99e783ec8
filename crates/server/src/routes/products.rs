use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use service::catalog::{self, ListingSource};
use tracing::info;

use crate::routes::ServerState;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ProductQuery {
    /// Page size, clamped to 1..=100. Defaults to 20.
    pub limit: Option<i64>,
}

/// Unparsable query strings fall back to the default limit.
#[utoipa::path(
    get, path = "/api/products", tag = "catalog",
    params(ProductQuery),
    responses((status = 200, description = "Products from the store, or the sample list", body = [crate::openapi::ProductDoc]))
)]
pub async fn list(State(state): State<ServerState>, query: Option<Query<ProductQuery>>) -> Json<Vec<Value>> {
    let limit = query.and_then(|Query(q)| q.limit);
    let listing = catalog::list_products(&state.store, limit).await;
    if listing.source == ListingSource::Fallback {
        info!(count = listing.items.len(), "serving sample products");
    }
    Json(listing.items)
}
