//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared by `ems_core`:
//!
//! - **Upstream**: [`HttpEmployeeGateway`], a reqwest client for the remote
//!   employee REST API, authenticated with a static bearer token
//! - **Export**: [`CsvFileExporter`], writing the employee list to a CSV
//!   file on local disk

// Re-export core types for convenience
pub use ems_core::errors::*;

/// Upstream module - HTTP access to the employee API
pub mod upstream;

/// Export module - CSV file output
pub mod export;

pub use export::CsvFileExporter;
pub use upstream::HttpEmployeeGateway;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// HTTP request error for the upstream API
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File system error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No home directory to place the default export folder in
    #[error("Could not determine home directory")]
    NoHomeDirectory,

    /// CSV encoding error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl From<InfrastructureError> for DomainError {
    fn from(error: InfrastructureError) -> Self {
        match error {
            InfrastructureError::Http(e) => DomainError::Transport {
                message: e.to_string(),
            },
            InfrastructureError::Io(e) => DomainError::Export {
                message: e.to_string(),
            },
            InfrastructureError::Csv(e) => DomainError::Export {
                message: e.to_string(),
            },
            InfrastructureError::NoHomeDirectory => DomainError::Export {
                message: InfrastructureError::NoHomeDirectory.to_string(),
            },
            InfrastructureError::Config(message) => DomainError::Internal { message },
        }
    }
}
