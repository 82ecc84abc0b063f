//! # Document Filters
//!
//! Exact-match predicates over field/value pairs. The store contract only
//! needs equality: multiple clauses combine with AND, and the empty filter
//! matches every document.

use serde_json::Value;

/// An exact-match filter over one or more document fields.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    /// The empty filter: matches every document.
    pub fn all() -> Self {
        Self::default()
    }

    /// Single-field equality filter.
    pub fn eq(field: impl Into<String>, value: Value) -> Self {
        Self::all().and(field, value)
    }

    /// Add an equality clause.
    pub fn and(mut self, field: impl Into<String>, value: Value) -> Self {
        self.clauses.push((field.into(), value));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check if a document matches every clause.
    ///
    /// A clause on a field the document does not carry never matches.
    pub fn matches(&self, doc: &Value) -> bool {
        self.clauses
            .iter()
            .all(|(field, value)| doc.get(field) == Some(value))
    }
}
