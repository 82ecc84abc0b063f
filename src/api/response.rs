//! # Response Envelopes
//!
//! The uniform `{success, ...}` shapes every handler returns.

use serde::Serialize;
use serde_json::Value;

use crate::pagination::PageLinks;

/// Paginated list envelope: `{success, prevPage, nextPage, data}`.
#[derive(Debug, Clone, Serialize)]
pub struct ListEnvelope {
    pub success: bool,

    #[serde(rename = "prevPage")]
    pub prev_page: Option<String>,

    #[serde(rename = "nextPage")]
    pub next_page: Option<String>,

    pub data: Vec<Value>,
}

impl ListEnvelope {
    pub fn new(links: PageLinks, data: Vec<Value>) -> Self {
        Self {
            success: true,
            prev_page: links.prev,
            next_page: links.next,
            data,
        }
    }
}

/// Successful single-operation envelope: `{success, data}`.
#[derive(Debug, Clone, Serialize)]
pub struct DataEnvelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> DataEnvelope<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Failure envelope: `{success, message}`.
#[derive(Debug, Clone, Serialize)]
pub struct MessageEnvelope {
    pub success: bool,
    pub message: String,
}

impl MessageEnvelope {
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
