//! MongoDB-backed item store.
//!
//! # Responsibilities
//! - Establish the client once at startup; the driver pools connections
//! - Translate domain operations into single-document collection calls
//! - Map driver failures onto the two store error variants
//!
//! # Design Decisions
//! - Documents carry a BSON ObjectId `_id` and a BSON datetime `date`;
//!   the domain `Item` sees a hex string and a `chrono` timestamp
//! - An id that does not parse as an ObjectId is reported as `NotFound`,
//!   the same as an absent record
//! - Delete resolves the record before removing it, never a blind delete

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use crate::config::DatabaseConfig;
use crate::store::{Item, ItemStore, StoreError};

/// Wire/storage form of an item inside the collection.
#[derive(Debug, Serialize, Deserialize)]
struct ItemDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    name: String,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    date: DateTime<Utc>,
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Item {
            id: doc.id.to_hex(),
            name: doc.name,
            date: doc.date,
        }
    }
}

/// Item store persisting to a MongoDB collection.
pub struct MongoStore {
    collection: Collection<ItemDocument>,
}

impl MongoStore {
    /// Connect to the configured database.
    ///
    /// The driver establishes connections lazily, so a dead database
    /// surfaces as `Unavailable` on the first operation rather than here.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(unavailable)?;
        let collection = client
            .database(&config.database)
            .collection(&config.collection);
        Ok(Self { collection })
    }
}

#[async_trait]
impl ItemStore for MongoStore {
    async fn create(&self, name: String) -> Result<Item, StoreError> {
        let document = ItemDocument {
            id: ObjectId::new(),
            name,
            date: Utc::now(),
        };
        self.collection
            .insert_one(&document)
            .await
            .map_err(unavailable)?;
        Ok(document.into())
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let cursor = self
            .collection
            .find(doc! {})
            .sort(doc! { "date": -1 })
            .await
            .map_err(unavailable)?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await.map_err(unavailable)?;
        Ok(documents.into_iter().map(Item::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Item, StoreError> {
        let oid = ObjectId::parse_str(id).map_err(|_| StoreError::NotFound)?;
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(unavailable)?
            .map(Item::from)
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let oid = ObjectId::parse_str(id).map_err(|_| StoreError::NotFound)?;
        // Resolve first so an absent id is NotFound, not a silent no-op.
        self.collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(unavailable)?
            .ok_or(StoreError::NotFound)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(unavailable)?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

fn unavailable(err: mongodb::error::Error) -> StoreError {
    StoreError::Unavailable(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // The driver connects lazily, so a store can be built without a
    // running database; only the pre-driver paths are exercised here.
    async fn offline_store() -> MongoStore {
        let config = DatabaseConfig {
            uri: "mongodb://127.0.0.1:27017".to_string(),
            ..DatabaseConfig::default()
        };
        MongoStore::connect(&config).await.expect("lazy client")
    }

    #[tokio::test]
    async fn test_find_by_malformed_id_is_not_found() {
        let store = offline_store().await;
        assert!(matches!(
            store.find_by_id("not-an-oid").await,
            Err(StoreError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_by_malformed_id_is_not_found() {
        let store = offline_store().await;
        assert!(matches!(
            store.delete_by_id("not-an-oid").await,
            Err(StoreError::NotFound)
        ));
    }
}
