//! # REST API Module
//!
//! Resource handlers over the vehicle collection, the uniform response
//! envelope, and the axum server glue.

pub mod errors;
pub mod response;
pub mod server;
pub mod service;

pub use errors::{ApiError, ApiResult};
pub use response::{DataEnvelope, ListEnvelope, MessageEnvelope};
pub use server::ApiServer;
pub use service::{CreateOutcome, VehicleService};
