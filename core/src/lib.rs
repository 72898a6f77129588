//! # EMS Core
//!
//! Domain layer for the employee management facade. This crate contains the
//! employee entity, the facade service with its ports, and the error types
//! that form the foundation of the application.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
