use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use service::StoreGateway;
use tower_http::{
    cors::CorsLayer,
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

pub mod products;
pub mod submissions;
pub mod system;

#[derive(Clone)]
pub struct ServerState {
    pub store: StoreGateway,
}

impl ServerState {
    pub fn new(store: StoreGateway) -> Self {
        Self { store }
    }
}

/// Build the full application router: system, catalog and submission routes.
pub fn build_router(state: ServerState, cors: CorsLayer, request_timeout: Duration) -> Router {
    let system = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .route("/test", get(system::diagnostics))
        .route("/api-docs/openapi.json", get(system::openapi_json));

    let api = Router::new()
        .route("/api/products", get(products::list))
        .route("/api/contact", post(submissions::contact))
        .route("/api/orders", post(submissions::order));

    system
        .merge(api)
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
