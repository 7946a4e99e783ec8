use async_trait::async_trait;
use futures::TryStreamExt;
use models::RecordKind;
use mongodb::{
    bson::{doc, Bson, Document},
    Client, Collection, Database,
};

use super::{DocumentStore, StoreError};

/// MongoDB-backed store. One collection per record kind.
pub struct MongoStore {
    client: Client,
    db: Database,
}

impl MongoStore {
    pub fn new(client: Client, database: &str) -> Self {
        let db = client.database(database);
        Self { client, db }
    }

    fn collection(&self, kind: RecordKind) -> Collection<Document> {
        self.db.collection::<Document>(kind.collection())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn database_name(&self) -> &str {
        self.db.name()
    }

    async fn insert(&self, kind: RecordKind, document: Document) -> Result<Bson, StoreError> {
        let res = self.collection(kind).insert_one(document).await?;
        Ok(res.inserted_id)
    }

    async fn find(&self, kind: RecordKind, filter: Document, limit: i64) -> Result<Vec<Document>, StoreError> {
        let collection = self.collection(kind);
        let mut query = collection.find(filter);
        if limit > 0 {
            query = query.limit(limit);
        }
        let cursor = query.await?;
        Ok(cursor.try_collect().await?)
    }

    async fn list_collections(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.db.list_collection_names().await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.db.run_command(doc! {"ping": 1}).await?;
        Ok(())
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
    }
}
