use thiserror::Error;

use crate::storage::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

