use axum::extract::FromRequest;

use crate::errors::JsonApiError;

/// `axum::Json` with rejections rendered as the JSON error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(JsonApiError))]
pub struct Payload<T>(pub T);
