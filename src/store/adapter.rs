//! # Store Contract
//!
//! The seam between resource handlers and the backing document store.
//! Handlers only ever see this trait, so tests can substitute a fake store
//! and the backing implementation can change without touching the API layer.

use serde_json::Value;
use thiserror::Error;

use super::filter::Filter;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store errors
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store cannot be reached. Surfaced as 503.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// Invalid internal state (poisoned lock etc.). Surfaced as 500.
    #[error("internal store error: {0}")]
    Internal(String),
}

/// One page of matching documents plus the collection total.
#[derive(Debug, Clone)]
pub struct FindPage {
    /// Matching documents after skip/limit, bookkeeping fields stripped.
    pub docs: Vec<Value>,

    /// Count of all documents in the collection, ignoring filter and
    /// pagination. Feeds the next-page rule.
    pub collection_total: u64,
}

/// Document store contract, parameterized by a collection name.
///
/// Every operation is a single atomic primitive at the storage layer; there
/// is no multi-call transaction.
pub trait DocumentStore: Send + Sync {
    /// Return the documents matching `filter` after skipping `skip` of them,
    /// at most `limit` (`None` = no limit), together with the collection
    /// total. Internal bookkeeping fields are never included in returned
    /// documents.
    fn find(
        &self,
        collection: &str,
        filter: &Filter,
        skip: u64,
        limit: Option<u64>,
    ) -> StoreResult<FindPage>;

    /// Append a document. Does not itself enforce uniqueness.
    fn insert_one(&self, collection: &str, doc: Value) -> StoreResult<()>;

    /// Append `doc` only if no document in the collection already carries
    /// the same value for `key_field`. Returns whether the insert happened.
    ///
    /// The check and the append are atomic; this is the primitive the
    /// uniqueness-checked create path relies on.
    fn insert_unique(&self, collection: &str, key_field: &str, doc: Value) -> StoreResult<bool>;

    /// Remove every document matching `filter`; returns the count removed
    /// (0 if none matched — not an error).
    fn delete_many(&self, collection: &str, filter: &Filter) -> StoreResult<u64>;
}
