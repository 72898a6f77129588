//! In-memory gateway and exporter for testing

use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use crate::domain::entities::Employee;
use crate::errors::{DomainError, DomainResult};

use super::traits::{EmployeeExporter, EmployeeGateway};
use super::types::{ExportReceipt, UpstreamResponse};

/// A call received by [`MockEmployeeGateway`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    List,
    Get(i64),
    FindByName(String),
    Delete(i64),
    Update(i64, Employee),
    Create(Employee),
}

/// Gateway answering every call with the same canned response
pub struct MockEmployeeGateway {
    response: DomainResult<UpstreamResponse>,
    calls: Mutex<Vec<GatewayCall>>,
}

impl MockEmployeeGateway {
    pub fn new(response: UpstreamResponse) -> Self {
        Self {
            response: Ok(response),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Gateway answering `200 OK` with `body` serialized as JSON
    pub fn ok_json(body: &impl serde::Serialize) -> Self {
        let body = serde_json::to_string(body).unwrap_or_default();
        Self::new(UpstreamResponse::ok(body))
    }

    /// Gateway whose upstream cannot be reached
    pub fn unreachable() -> Self {
        Self {
            response: Err(DomainError::Transport {
                message: "connection refused".to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls received so far, in order
    pub fn calls(&self) -> Vec<GatewayCall> {
        self.lock_calls().clone()
    }

    fn lock_calls(&self) -> MutexGuard<'_, Vec<GatewayCall>> {
        self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn record(&self, call: GatewayCall) -> DomainResult<UpstreamResponse> {
        self.lock_calls().push(call);
        self.response.clone()
    }
}

#[async_trait]
impl EmployeeGateway for MockEmployeeGateway {
    async fn list(&self) -> DomainResult<UpstreamResponse> {
        self.record(GatewayCall::List)
    }

    async fn get(&self, id: i64) -> DomainResult<UpstreamResponse> {
        self.record(GatewayCall::Get(id))
    }

    async fn find_by_name(&self, name: &str) -> DomainResult<UpstreamResponse> {
        self.record(GatewayCall::FindByName(name.to_string()))
    }

    async fn delete(&self, id: i64) -> DomainResult<UpstreamResponse> {
        self.record(GatewayCall::Delete(id))
    }

    async fn update(&self, id: i64, employee: &Employee) -> DomainResult<UpstreamResponse> {
        self.record(GatewayCall::Update(id, employee.clone()))
    }

    async fn create(&self, employee: &Employee) -> DomainResult<UpstreamResponse> {
        self.record(GatewayCall::Create(employee.clone()))
    }
}

/// Exporter keeping every exported list in memory
pub struct MockEmployeeExporter {
    exports: Mutex<Vec<Vec<Employee>>>,
    should_fail: bool,
}

impl MockEmployeeExporter {
    pub fn new(should_fail: bool) -> Self {
        Self {
            exports: Mutex::new(Vec::new()),
            should_fail,
        }
    }

    /// Lists passed to [`EmployeeExporter::export`], in order
    pub fn exports(&self) -> Vec<Vec<Employee>> {
        self.exports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl Default for MockEmployeeExporter {
    fn default() -> Self {
        Self::new(false)
    }
}

#[async_trait]
impl EmployeeExporter for MockEmployeeExporter {
    async fn export(&self, employees: &[Employee]) -> DomainResult<ExportReceipt> {
        if self.should_fail {
            return Err(DomainError::Export {
                message: "disk full".to_string(),
            });
        }
        self.exports
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(employees.to_vec());
        Ok(ExportReceipt {
            path: PathBuf::from("exported_data.csv"),
            rows: employees.len(),
        })
    }
}
