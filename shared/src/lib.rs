//! Shared configuration and response types for the EMS server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Error response structures

pub mod config;
pub mod errors;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CorsConfig, Environment, ExportConfig, NotFoundDetection, ServerConfig,
    UpstreamConfig,
};
pub use errors::{error_codes, ErrorResponse};
