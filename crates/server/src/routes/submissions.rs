use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use service::{contact, orders};
use tracing::info;

use crate::{errors::JsonApiError, extract::Payload, routes::ServerState};

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    pub status: &'static str,
    pub id: Option<String>,
    pub stored: bool,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub status: &'static str,
    pub id: Option<String>,
    pub stored: bool,
    pub total: f64,
}

#[utoipa::path(
    post, path = "/api/contact", tag = "submissions",
    request_body = crate::openapi::ContactInquiryDoc,
    responses(
        (status = 200, description = "Inquiry accepted", body = crate::openapi::SubmissionDoc),
        (status = 400, description = "Malformed JSON", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn contact(
    State(state): State<ServerState>,
    Payload(body): Payload<Value>,
) -> Result<Json<SubmissionResponse>, JsonApiError> {
    let submission = contact::submit_inquiry(&state.store, body).await?;
    info!(id = ?submission.id, stored = submission.stored(), "contact inquiry accepted");
    Ok(Json(SubmissionResponse { status: "ok", stored: submission.stored(), id: submission.id }))
}

#[utoipa::path(
    post, path = "/api/orders", tag = "submissions",
    request_body = crate::openapi::OrderDoc,
    responses(
        (status = 200, description = "Order accepted", body = crate::openapi::OrderReceiptDoc),
        (status = 400, description = "Malformed JSON or no items provided", body = crate::openapi::ErrorDoc),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDoc),
        (status = 503, description = "Store Unavailable", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn order(
    State(state): State<ServerState>,
    Payload(body): Payload<Value>,
) -> Result<Json<OrderResponse>, JsonApiError> {
    let receipt = orders::create_order(&state.store, body).await?;
    Ok(Json(OrderResponse {
        status: "ok",
        stored: receipt.id.is_some(),
        id: receipt.id,
        total: receipt.total,
    }))
}
