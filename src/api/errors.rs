//! # REST API Errors
//!
//! Error taxonomy for the resource handlers. Every variant maps to an HTTP
//! status and renders as the failure envelope `{success:false, message}`.
//!
//! A duplicate VIN on create is deliberately *not* here: it is a soft
//! failure carried in a 200 envelope (see `service::CreateOutcome`).

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::store::StoreError;

use super::response::MessageEnvelope;

/// Result type for resource operations
pub type ApiResult<T> = Result<T, ApiError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed vehicle identifier
    #[error("VIN not valid")]
    InvalidVin,

    /// No matching vehicle
    #[error("no vehicle found")]
    NotFound,

    /// Store failure, mapped by its own taxonomy
    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidVin => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Store(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Store(StoreError::Internal(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(MessageEnvelope::failure(self.to_string()));
        (status, body).into_response()
    }
}
