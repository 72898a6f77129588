//! Types exchanged between the employee service and its ports

use std::path::PathBuf;

/// Raw upstream answer, before any interpretation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamResponse {
    /// Numeric HTTP status code
    pub status: u16,
    /// Reason phrase as sent by the server, or the canonical phrase for
    /// `status` when the server sent none; empty for unknown codes
    pub reason: String,
    /// Response body as text
    pub body: String,
}

impl UpstreamResponse {
    pub fn new(status: u16, reason: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            reason: reason.into(),
            body: body.into(),
        }
    }

    /// `200 OK` with the given body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, "OK", body)
    }

    /// `404 Not Found` with an empty body
    pub fn not_found() -> Self {
        Self::new(404, "Not Found", "")
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Outcome of a successful CSV export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    /// File that was written
    pub path: PathBuf,
    /// Number of employee rows, header excluded
    pub rows: usize,
}
