//! Shared error response structure

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// JSON error body returned for server-side failures and rejected requests
/// that never reach an endpoint handler
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for client identification
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,

    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a detail field to the error response
    pub fn add_detail(mut self, key: impl Into<String>, value: impl Serialize) -> Self {
        let details = self.details.get_or_insert_with(HashMap::new);
        if let Ok(json_value) = serde_json::to_value(value) {
            details.insert(key.into(), json_value);
        }
        self
    }
}

/// Error codes used in [`ErrorResponse::error`]
pub mod error_codes {
    pub const NOT_FOUND: &str = "not_found";
    pub const INVALID_QUERY: &str = "invalid_query";
    pub const UPSTREAM_ERROR: &str = "upstream_error";
    pub const UPSTREAM_UNAVAILABLE: &str = "upstream_unavailable";
    pub const EXPORT_FAILED: &str = "export_failed";
    pub const INTERNAL_ERROR: &str = "internal_error";
}
