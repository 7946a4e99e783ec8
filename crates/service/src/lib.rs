//! Service layer between the HTTP routes and the document store.
//! - `storage`: store trait, MongoDB and in-memory backends, gateway.
//! - `normalize`: ObjectId → string rewriting for responses.
//! - `catalog`, `contact`, `orders`, `diagnostics`: one module per use case.

pub mod catalog;
pub mod contact;
pub mod diagnostics;
pub mod errors;
pub mod normalize;
pub mod orders;
pub mod storage;

pub use errors::ServiceError;
pub use storage::{StoreError, StoreGateway};
