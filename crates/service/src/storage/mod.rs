//! Document store access.
//!
//! `DocumentStore` is the seam between services and a concrete backend
//! (`MongoStore` in production, `MemoryStore` for tests).
//! Services never hold a backend directly; they go through `StoreGateway`,
//! which turns an unconfigured store into empty reads and absent ids.

pub mod memory_store;
pub mod mongo_store;

use std::sync::Arc;

use async_trait::async_trait;
use configs::DatabaseConfig;
use models::RecordKind;
use mongodb::bson::{Bson, Document};
use thiserror::Error;
use tracing::{info, instrument};

use crate::normalize;

pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store operation failed: {0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(e: mongodb::error::Error) -> Self {
        StoreError::Backend(e.to_string())
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    fn database_name(&self) -> &str;

    /// Append one document to the collection of `kind`; returns its `_id`.
    async fn insert(&self, kind: RecordKind, document: Document) -> Result<Bson, StoreError>;

    /// At most `limit` documents matching `filter`, in natural store order.
    /// A non-positive limit means no limit.
    async fn find(&self, kind: RecordKind, filter: Document, limit: i64) -> Result<Vec<Document>, StoreError>;

    async fn list_collections(&self) -> Result<Vec<String>, StoreError>;

    async fn ping(&self) -> Result<(), StoreError>;

    /// Release connections. Called once, after the server stops.
    async fn shutdown(&self) {}
}

/// Cloneable handle shared by all request handlers.
#[derive(Clone, Default)]
pub struct StoreGateway {
    store: Option<Arc<dyn DocumentStore>>,
}

impl StoreGateway {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store: Some(store) }
    }

    pub fn unconfigured() -> Self {
        Self { store: None }
    }

    /// Build from config: a `MongoStore` when a URL is set, otherwise an
    /// unconfigured gateway.
    pub async fn connect(cfg: &DatabaseConfig) -> Result<Self, StoreError> {
        let client = models::db::connect(cfg)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(match client {
            Some(client) => Self::new(Arc::new(MongoStore::new(client, &cfg.name))),
            None => Self::unconfigured(),
        })
    }

    pub fn is_configured(&self) -> bool {
        self.store.is_some()
    }

    pub fn database_name(&self) -> Option<&str> {
        self.store.as_deref().map(|s| s.database_name())
    }

    /// Insert and return the stored id as a string, or `None` without a store.
    #[instrument(skip(self, document), fields(collection = kind.collection()))]
    pub async fn insert(&self, kind: RecordKind, document: Document) -> Result<Option<String>, StoreError> {
        let Some(store) = &self.store else {
            return Ok(None);
        };
        let id = store.insert(kind, document).await?;
        let id = match normalize::normalize(id) {
            Bson::String(s) => s,
            other => other.to_string(),
        };
        info!(%id, "document inserted");
        Ok(Some(id))
    }

    #[instrument(skip(self, filter), fields(collection = kind.collection()))]
    pub async fn find(&self, kind: RecordKind, filter: Document, limit: i64) -> Result<Vec<Document>, StoreError> {
        match &self.store {
            Some(store) => store.find(kind, filter, limit).await,
            None => Ok(Vec::new()),
        }
    }

    /// `None` without a store.
    pub async fn list_collections(&self) -> Option<Result<Vec<String>, StoreError>> {
        match &self.store {
            Some(store) => Some(store.list_collections().await),
            None => None,
        }
    }

    pub async fn ping(&self) -> Option<Result<(), StoreError>> {
        match &self.store {
            Some(store) => Some(store.ping().await),
            None => None,
        }
    }

    pub async fn shutdown(&self) {
        if let Some(store) = &self.store {
            store.shutdown().await;
            info!(event = "store_shutdown", "document store released");
        }
    }
}
