use actix_web::{web, HttpResponse};

use ems_core::services::employee::{EmployeeExporter, EmployeeGateway};

use super::{AppState, FirstNameQuery, IdQuery};
use crate::handlers::error::handle_domain_error;

/// Handler for GET /EMS/GetAllEmployees
///
/// # Response
/// - 200 OK: JSON array of employees
/// - 400 Bad Request: `Error occured` when the upstream body cannot be decoded
/// - 500 Internal Server Error: upstream failure
pub async fn get_all_employees<G, E>(state: web::Data<AppState<G, E>>) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    match state.employee_service.get_all().await {
        Ok(employees) => {
            log::info!("Returning {} employees", employees.len());
            HttpResponse::Ok().json(employees)
        }
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /EMS/GetEmployeesById?id={id}
///
/// # Response
/// - 200 OK: JSON employee
/// - 400 Bad Request: `Enter a valid employee Id` for ids ≤ 0, `Not found`
///   when upstream reports the employee missing or sends an unreadable body
pub async fn get_employees_by_id<G, E>(
    state: web::Data<AppState<G, E>>,
    query: web::Query<IdQuery>,
) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    match state.employee_service.get_by_id(query.id).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for GET /EMS/GetEmployeesByFirstName?firstName={name}
///
/// # Response
/// - 200 OK: JSON array of matching employees
/// - 400 Bad Request: `Error occured` when the name is missing or empty,
///   `Not found` when the upstream body cannot be decoded
pub async fn get_employees_by_first_name<G, E>(
    state: web::Data<AppState<G, E>>,
    query: web::Query<FirstNameQuery>,
) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    match state
        .employee_service
        .get_by_first_name(query.first_name.as_deref())
        .await
    {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(error) => handle_domain_error(&error),
    }
}
