use std::collections::HashMap;

use async_trait::async_trait;
use models::RecordKind;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use tokio::sync::RwLock;

use super::{DocumentStore, StoreError};

/// In-process document store keyed by collection name.
///
/// Assigns a fresh `ObjectId` to documents without `_id`, places `_id`
/// first like MongoDB does, and matches filters by top-level equality.
pub struct MemoryStore {
    name: String,
    collections: RwLock<HashMap<&'static str, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), collections: RwLock::new(HashMap::new()) }
    }

    pub async fn len(&self, kind: RecordKind) -> usize {
        let map = self.collections.read().await;
        map.get(kind.collection()).map_or(0, Vec::len)
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter.iter().all(|(k, v)| document.get(k) == Some(v))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, kind: RecordKind, document: Document) -> Result<Bson, StoreError> {
        let id = document.get("_id").cloned().unwrap_or_else(|| Bson::ObjectId(ObjectId::new()));
        let mut stored = Document::new();
        stored.insert("_id", id.clone());
        for (k, v) in document {
            if k != "_id" {
                stored.insert(k, v);
            }
        }

        let mut map = self.collections.write().await;
        let docs = map.entry(kind.collection()).or_default();
        if docs.iter().any(|d| d.get("_id") == Some(&id)) {
            return Err(StoreError::Backend(format!("duplicate _id {id} in {}", kind.collection())));
        }
        docs.push(stored);
        Ok(id)
    }

    async fn find(&self, kind: RecordKind, filter: Document, limit: i64) -> Result<Vec<Document>, StoreError> {
        let map = self.collections.read().await;
        let Some(docs) = map.get(kind.collection()) else {
            return Ok(Vec::new());
        };
        let cap = usize::try_from(limit).ok().filter(|n| *n > 0).unwrap_or(usize::MAX);
        Ok(docs.iter().filter(|d| matches(d, &filter)).take(cap).cloned().collect())
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        let map = self.collections.read().await;
        let mut names: Vec<String> = map.keys().map(|k| k.to_string()).collect();
        names.sort();
        Ok(names)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
