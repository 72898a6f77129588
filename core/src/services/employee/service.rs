//! Employee service implementation

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use ems_shared::config::NotFoundDetection;

use crate::domain::entities::Employee;
use crate::errors::{messages, DomainError, DomainResult};

use super::config::EmployeeServiceConfig;
use super::traits::{EmployeeExporter, EmployeeGateway};
use super::types::{ExportReceipt, UpstreamResponse};

/// Facade over the upstream employee API
pub struct EmployeeService<G, E>
where
    G: EmployeeGateway,
    E: EmployeeExporter,
{
    gateway: Arc<G>,
    exporter: Arc<E>,
    config: EmployeeServiceConfig,
}

impl<G, E> EmployeeService<G, E>
where
    G: EmployeeGateway,
    E: EmployeeExporter,
{
    pub fn new(gateway: Arc<G>, exporter: Arc<E>, config: EmployeeServiceConfig) -> Self {
        Self {
            gateway,
            exporter,
            config,
        }
    }

    /// List every employee.
    ///
    /// A non-success upstream status is not interpreted and surfaces as
    /// [`DomainError::Upstream`]; that includes 404.
    pub async fn get_all(&self) -> DomainResult<Vec<Employee>> {
        let response = self.gateway.list().await?;
        ensure_success(&response)?;
        decode(&response.body, messages::ERROR_OCCURED)
    }

    /// Fetch one employee by id
    pub async fn get_by_id(&self, id: i64) -> DomainResult<Employee> {
        if id <= 0 {
            return Err(DomainError::validation(messages::INVALID_EMPLOYEE_ID));
        }

        let response = self.gateway.get(id).await?;
        self.reject_not_found(&response, id)?;
        ensure_success(&response)?;
        decode(&response.body, messages::NOT_FOUND)
    }

    /// Search employees by name. An empty name counts as absent.
    pub async fn get_by_first_name(&self, first_name: Option<&str>) -> DomainResult<Vec<Employee>> {
        let first_name = match first_name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(DomainError::validation(messages::ERROR_OCCURED)),
        };

        let response = self.gateway.find_by_name(first_name).await?;
        ensure_success(&response)?;
        decode(&response.body, messages::NOT_FOUND)
    }

    /// Delete one employee. Any non-success answer is refused with the
    /// upstream reason phrase.
    pub async fn delete_by_id(&self, id: i64) -> DomainResult<()> {
        if id <= 0 {
            return Err(DomainError::validation(messages::ENTER_EMPLOYEE_ID));
        }

        let response = self.gateway.delete(id).await?;
        if response.is_success() {
            info!(employee_id = id, "Employee deleted upstream");
            return Ok(());
        }

        warn!(
            employee_id = id,
            status = response.status,
            "Upstream refused employee deletion"
        );
        Err(DomainError::Rejected {
            reason: response.reason,
        })
    }

    /// Replace one employee and return the record upstream sends back
    pub async fn update_by_id(&self, id: i64, employee: Option<Employee>) -> DomainResult<Employee> {
        let employee = match employee {
            Some(employee) if id > 0 => employee,
            _ => return Err(DomainError::validation(messages::ENTER_EMPLOYEE_ID)),
        };

        let response = self.gateway.update(id, &employee).await?;
        self.reject_not_found(&response, id)?;
        ensure_success(&response)?;
        decode(&response.body, messages::NOT_FOUND)
    }

    /// Create an employee and return the record upstream sends back
    pub async fn create(&self, employee: Option<Employee>) -> DomainResult<Employee> {
        let Some(employee) = employee else {
            return Err(DomainError::validation(messages::ENTER_EMPLOYEE_ID));
        };

        let response = self.gateway.create(&employee).await?;
        if self.is_not_found(&response) {
            warn!(status = response.status, "Upstream reported users collection as not found");
            return Err(DomainError::NotFound);
        }
        ensure_success(&response)?;
        decode(&response.body, messages::NOT_FOUND)
    }

    /// Fetch the full list and write it out through the exporter
    pub async fn export(&self) -> DomainResult<ExportReceipt> {
        let response = self.gateway.list().await?;
        ensure_success(&response)?;
        let employees: Vec<Employee> = decode(&response.body, messages::ERROR_OCCURED)?;

        let receipt = self.exporter.export(&employees).await?;
        info!(
            path = %receipt.path.display(),
            rows = receipt.rows,
            "Employee list exported"
        );
        Ok(receipt)
    }

    fn is_not_found(&self, response: &UpstreamResponse) -> bool {
        match self.config.not_found_detection {
            NotFoundDetection::ReasonPhrase => response.reason == "Not Found",
            NotFoundDetection::StatusCode => response.status == 404,
        }
    }

    fn reject_not_found(&self, response: &UpstreamResponse, id: i64) -> DomainResult<()> {
        if self.is_not_found(response) {
            warn!(employee_id = id, status = response.status, "Employee not found upstream");
            return Err(DomainError::NotFound);
        }
        Ok(())
    }
}

fn ensure_success(response: &UpstreamResponse) -> DomainResult<()> {
    if response.is_success() {
        return Ok(());
    }
    Err(DomainError::Upstream {
        status: response.status,
        reason: response.reason.clone(),
    })
}

/// Decode a JSON body. Empty, `null` and malformed bodies are all reported
/// as [`DomainError::Decode`] carrying `failure_message`.
fn decode<T: DeserializeOwned>(body: &str, failure_message: &str) -> DomainResult<T> {
    match serde_json::from_str::<Option<T>>(body) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => {
            debug!("Upstream returned a null body");
            Err(DomainError::decode(failure_message))
        }
        Err(e) => {
            debug!(error = %e, "Upstream body could not be decoded");
            Err(DomainError::decode(failure_message))
        }
    }
}
