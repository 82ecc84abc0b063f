//! # In-Memory Store
//!
//! Process-wide document store backed by a `RwLock<HashMap>`. Collections
//! are created lazily on first insert. Each stored document is stamped with
//! an internal `_id` for bookkeeping; reads strip it before returning.

use std::collections::HashMap;
use std::sync::RwLock;

use serde_json::Value;
use uuid::Uuid;

use super::adapter::{DocumentStore, FindPage, StoreError, StoreResult};
use super::filter::Filter;

/// Internal bookkeeping field stamped on every stored document.
pub const INTERNAL_ID: &str = "_id";

/// In-memory document store: collection name -> insertion-ordered documents.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn stamp(mut doc: Value) -> Value {
        if let Some(obj) = doc.as_object_mut() {
            obj.insert(
                INTERNAL_ID.to_string(),
                Value::String(Uuid::new_v4().to_string()),
            );
        }
        doc
    }

    fn strip(mut doc: Value) -> Value {
        if let Some(obj) = doc.as_object_mut() {
            obj.remove(INTERNAL_ID);
        }
        doc
    }
}

fn poisoned(_: impl std::fmt::Debug) -> StoreError {
    StoreError::Internal("lock poisoned".to_string())
}

impl DocumentStore for MemoryStore {
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<FindPage> {
        let collections = self.collections.read().map_err(poisoned)?;
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);

        let collection_total = docs.len() as u64;

        let matching = docs.iter().filter(|d| filter.matches(d));
        let docs: Vec<Value> = match limit {
            Some(limit) => matching
                .skip(skip as usize)
                .take(limit as usize)
                .cloned()
                .map(Self::strip)
                .collect(),
            None => matching
                .skip(skip as usize)
                .cloned()
                .map(Self::strip)
                .collect(),
        };

        Ok(FindPage {
            docs,
            collection_total,
        })
    }

    fn insert_one(&self, collection: &str, doc: Value) -> StoreResult<()> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Self::stamp(doc));
        Ok(())
    }

    fn insert_unique(&self, collection: &str, key_field: &str, doc: Value) -> StoreResult<bool> {
        // The existence check and the append happen under one write lock,
        // so concurrent inserts with the same key admit exactly one winner.
        let mut collections = self.collections.write().map_err(poisoned)?;
        let docs = collections.entry(collection.to_string()).or_default();

        let key = doc.get(key_field);
        if docs.iter().any(|d| d.get(key_field) == key) {
            return Ok(false);
        }

        docs.push(Self::stamp(doc));
        Ok(true)
    }

    fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64> {
        let mut collections = self.collections.write().map_err(poisoned)?;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(0);
        };

        let before = docs.len();
        docs.retain(|d| !filter.matches(d));
        Ok((before - docs.len()) as u64)
    }
}
