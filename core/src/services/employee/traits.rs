//! Ports used by the employee service

use async_trait::async_trait;

use crate::domain::entities::Employee;
use crate::errors::DomainResult;

use super::types::{ExportReceipt, UpstreamResponse};

/// Access to the remote employee API
///
/// Each method performs exactly one outbound call and returns the raw
/// answer whatever its status. Only transport-level failures are reported
/// as errors (`DomainError::Transport`).
#[async_trait]
pub trait EmployeeGateway: Send + Sync {
    /// `GET users`
    async fn list(&self) -> DomainResult<UpstreamResponse>;

    /// `GET users/{id}`
    async fn get(&self, id: i64) -> DomainResult<UpstreamResponse>;

    /// `GET users?name={name}`
    async fn find_by_name(&self, name: &str) -> DomainResult<UpstreamResponse>;

    /// `DELETE users/{id}`
    async fn delete(&self, id: i64) -> DomainResult<UpstreamResponse>;

    /// `PUT users/{id}` with the employee as JSON body
    async fn update(&self, id: i64, employee: &Employee) -> DomainResult<UpstreamResponse>;

    /// `POST users` with the employee as JSON body
    async fn create(&self, employee: &Employee) -> DomainResult<UpstreamResponse>;
}

/// Destination for the employee list export
#[async_trait]
pub trait EmployeeExporter: Send + Sync {
    /// Write all employees, replacing any previous export
    async fn export(&self, employees: &[Employee]) -> DomainResult<ExportReceipt>;
}
