//! Domain error types and the fixed client-facing messages.

use thiserror::Error;


/// Fixed messages returned to clients. The spelling matches what existing
/// clients of the endpoints compare against.
pub mod messages {
    pub const INVALID_EMPLOYEE_ID: &str = "Enter a valid employee Id";
    pub const ENTER_EMPLOYEE_ID: &str = "Enter employee Id";
    pub const NOT_FOUND: &str = "Not found";
    pub const ERROR_OCCURED: &str = "Error occured";
    pub const DELETED: &str = "Succesful";
    pub const EXPORTED: &str = "Exported Successfully";
}

/// Core domain errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input rejected before any upstream call was made
    #[error("{message}")]
    Validation { message: String },

    /// Upstream reported the resource as missing
    #[error("Not found")]
    NotFound,

    /// Upstream body was empty, `null`, or not of the expected shape
    #[error("{message}")]
    Decode { message: String },

    /// Upstream refused the operation; carries its reason phrase
    #[error("{reason}")]
    Rejected { reason: String },

    /// Unhandled non-success status from upstream
    #[error("Upstream returned {status} {reason}")]
    Upstream { status: u16, reason: String },

    /// The upstream could not be reached or the exchange broke off
    #[error("Upstream request failed: {message}")]
    Transport { message: String },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether the failure is reported to the client as a bad request
    /// rather than a server error
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::NotFound | Self::Decode { .. } | Self::Rejected { .. }
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
