//! # Document Store
//!
//! A thin contract over a backing document store (filtered find with paging,
//! insert, insert-if-absent, bulk delete per named collection) plus the
//! in-memory implementation the server runs on.

pub mod adapter;
pub mod filter;
pub mod memory;

pub use adapter::{DocumentStore, FindPage, StoreError, StoreResult};
pub use filter::Filter;
pub use memory::MemoryStore;
