//! # Observability
//!
//! Structured JSON logging for the service.

pub mod logger;

pub use logger::{LogSink, Severity};
