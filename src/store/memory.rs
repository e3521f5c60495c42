//! In-process item store.
//!
//! Backs development mode when no database URI is configured, and stands in
//! for MongoDB in the integration tests. Same contract as the Mongo adapter,
//! including newest-first listing.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::store::{Item, ItemStore, StoreError};

/// Item store holding all records in memory. Contents vanish on restart.
#[derive(Default)]
pub struct MemoryStore {
    items: RwLock<Vec<Item>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn create(&self, name: String) -> Result<Item, StoreError> {
        let item = Item {
            id: Uuid::new_v4().to_string(),
            name,
            date: Utc::now(),
        };
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.read().await;
        // Reverse insertion order first so a stable sort keeps the newest
        // insertion in front when timestamps collide.
        let mut ordered: Vec<Item> = items.iter().rev().cloned().collect();
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(ordered)
    }

    async fn find_by_id(&self, id: &str) -> Result<Item, StoreError> {
        self.items
            .read()
            .await
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let mut items = self.items.write().await;
        match items.iter().position(|item| item.id == id) {
            Some(index) => {
                items.remove(index);
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}
