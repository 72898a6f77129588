//! Employee management routes
//!
//! All endpoints live under `/EMS` and forward to the upstream employee API:
//! - `GET /EMS/GetAllEmployees`
//! - `GET /EMS/GetEmployeesById?id=`
//! - `GET /EMS/GetEmployeesByFirstName?firstName=`
//! - `DELETE /EMS/DeleteEmployeesById?id=`
//! - `PUT /EMS/UpdateEmployeesById?id=`
//! - `POST /EMS/CreateEmployee`
//! - `GET /EMS/ExportEmployeeList`

pub mod export;
pub mod read;
pub mod write;

use actix_web::web;
use serde::Deserialize;
use std::sync::Arc;

use ems_core::services::employee::{EmployeeExporter, EmployeeGateway, EmployeeService};

/// Application state that holds shared services
pub struct AppState<G, E>
where
    G: EmployeeGateway,
    E: EmployeeExporter,
{
    pub employee_service: Arc<EmployeeService<G, E>>,
}

impl<G, E> AppState<G, E>
where
    G: EmployeeGateway,
    E: EmployeeExporter,
{
    pub fn new(employee_service: EmployeeService<G, E>) -> Self {
        Self {
            employee_service: Arc::new(employee_service),
        }
    }
}

/// `?id=` query; a missing id binds as 0 and is rejected by the service
#[derive(Debug, Deserialize)]
pub struct IdQuery {
    #[serde(default)]
    pub id: i64,
}

/// `?firstName=` query
#[derive(Debug, Deserialize)]
pub struct FirstNameQuery {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
}

/// Register the `/EMS` scope
pub fn configure<G, E>(cfg: &mut web::ServiceConfig)
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    cfg.service(
        web::scope("/EMS")
            .route("/GetAllEmployees", web::get().to(read::get_all_employees::<G, E>))
            .route("/GetEmployeesById", web::get().to(read::get_employees_by_id::<G, E>))
            .route(
                "/GetEmployeesByFirstName",
                web::get().to(read::get_employees_by_first_name::<G, E>),
            )
            .route(
                "/DeleteEmployeesById",
                web::delete().to(write::delete_employees_by_id::<G, E>),
            )
            .route(
                "/UpdateEmployeesById",
                web::put().to(write::update_employees_by_id::<G, E>),
            )
            .route("/CreateEmployee", web::post().to(write::create_employee::<G, E>))
            .route(
                "/ExportEmployeeList",
                web::get().to(export::export_employee_list::<G, E>),
            ),
    );
}
