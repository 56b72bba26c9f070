use super::store::DocumentStore;
use crate::models::Collection;
use anyhow::{anyhow, Result as AnyhowResult};
use bson::Document;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-process store used to exercise the seeding logic without a server.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<Document>>>,
    fail_on: Option<Collection>,
}

impl MemoryStore {
    /// A store whose inserts into `collection` are rejected.
    pub fn failing_on(collection: Collection) -> Self {
        Self {
            fail_on: Some(collection),
            ..Self::default()
        }
    }

    pub fn preload(&self, collection: Collection, documents: Vec<Document>) {
        self.collections
            .lock()
            .unwrap()
            .entry(collection)
            .or_default()
            .extend(documents);
    }

    pub fn documents(&self, collection: Collection) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.documents(collection).len()
    }
}

impl DocumentStore for MemoryStore {
    async fn clear(&self, collection: Collection) -> AnyhowResult<u64> {
        let removed = self
            .collections
            .lock()
            .unwrap()
            .remove(&collection)
            .map_or(0, |docs| docs.len());
        Ok(removed as u64)
    }

    async fn insert(&self, collection: Collection, documents: Vec<Document>) -> AnyhowResult<usize> {
        if self.fail_on == Some(collection) {
            return Err(anyhow!("write rejected by {}", collection));
        }
        let inserted = documents.len();
        self.preload(collection, documents);
        Ok(inserted)
    }
}
