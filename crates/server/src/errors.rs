use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use models::{FieldError, ModelError};
use serde::Serialize;
use service::ServiceError;
use tracing::{error, warn};

/// Client-facing detail for store failures; the driver error is only logged.
pub const STORE_UNAVAILABLE_DETAIL: &str = "the document store is unavailable, please retry later";

/// JSON error envelope: `{"error", "detail", "fields"}`.
#[derive(Debug, Serialize)]
pub struct JsonApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &str, detail: Option<String>) -> Self {
        Self { status, error: error.to_string(), detail, fields: Vec::new() }
    }

    pub fn with_fields(mut self, fields: Vec<FieldError>) -> Self {
        self.fields = fields;
        self
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}

impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        JsonApiError::new(rejection.status(), "Bad Request", Some(rejection.body_text()))
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Model(ModelError::EmptyOrder) => {
                JsonApiError::new(StatusCode::BAD_REQUEST, "Bad Request", Some(ModelError::EmptyOrder.to_string()))
            }
            ServiceError::Model(err @ ModelError::Malformed(_)) => {
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(err.to_string()))
            }
            ServiceError::Model(ModelError::Validation(fields)) => {
                let detail = ModelError::Validation(fields.clone()).to_string();
                JsonApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Validation Error", Some(detail)).with_fields(fields)
            }
            ServiceError::Model(err) => {
                error!(error = %err, "model error");
                JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error", Some(err.to_string()))
            }
            ServiceError::Store(err) => {
                warn!(error = %err, "store failure on write");
                JsonApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Store Unavailable", Some(STORE_UNAVAILABLE_DETAIL.to_string()))
            }
        }
    }
}
