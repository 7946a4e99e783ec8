use axum::{extract::State, Json};
use common::types::{Health, Message};
use service::diagnostics::{self, Diagnosis};
use utoipa::OpenApi;

use crate::{openapi::ApiDoc, routes::ServerState};

#[utoipa::path(get, path = "/", tag = "system", responses((status = 200, description = "Service banner", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message::new("Atelier API running"))
}

#[utoipa::path(get, path = "/health", tag = "system", responses((status = 200, description = "Health OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Store diagnostic. Always 200; failures show up in the body.
#[utoipa::path(get, path = "/test", tag = "system", responses((status = 200, description = "Backend and store diagnostic", body = crate::openapi::DiagnosisDoc)))]
pub async fn diagnostics(State(state): State<ServerState>) -> Json<Diagnosis> {
    Json(diagnostics::diagnose(&state.store).await)
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
