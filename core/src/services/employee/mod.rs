//! Employee facade service
//!
//! Every operation makes at most one call to the upstream API through an
//! [`EmployeeGateway`] and translates the answer into a [`DomainResult`]:
//! - input checks run first and short-circuit without an upstream call
//! - "not found" answers are recognised on the read-by-id, update and create paths
//! - bodies are decoded into [`Employee`] records
//! - the export operation hands the decoded list to an [`EmployeeExporter`]
//!
//! [`DomainResult`]: crate::errors::DomainResult
//! [`Employee`]: crate::domain::entities::Employee

mod config;
pub mod mock;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::EmployeeServiceConfig;
pub use service::EmployeeService;
pub use traits::{EmployeeExporter, EmployeeGateway};
pub use types::{ExportReceipt, UpstreamResponse};
