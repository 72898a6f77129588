use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use ems_core::domain::entities::Employee;
use ems_core::errors::messages;
use ems_core::services::employee::{EmployeeExporter, EmployeeGateway};

use super::{AppState, IdQuery};
use crate::handlers::error::handle_domain_error;

/// Handler for DELETE /EMS/DeleteEmployeesById?id={id}
///
/// # Response
/// - 200 OK: `Succesful`
/// - 400 Bad Request: `Enter employee Id` for ids ≤ 0, otherwise the
///   upstream reason phrase
pub async fn delete_employees_by_id<G, E>(
    state: web::Data<AppState<G, E>>,
    query: web::Query<IdQuery>,
) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    match state.employee_service.delete_by_id(query.id).await {
        Ok(()) => HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(messages::DELETED),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for PUT /EMS/UpdateEmployeesById?id={id}
///
/// A missing or unreadable JSON body is treated as absent.
///
/// # Response
/// - 200 OK: the employee as returned by upstream
/// - 400 Bad Request: `Enter employee Id` for ids ≤ 0 or an absent body,
///   `Not found` when upstream reports the employee missing
pub async fn update_employees_by_id<G, E>(
    state: web::Data<AppState<G, E>>,
    query: web::Query<IdQuery>,
    body: Option<web::Json<Employee>>,
) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    let employee = body.map(web::Json::into_inner);
    match state.employee_service.update_by_id(query.id, employee).await {
        Ok(employee) => HttpResponse::Ok().json(employee),
        Err(error) => handle_domain_error(&error),
    }
}

/// Handler for POST /EMS/CreateEmployee
///
/// # Response
/// - 200 OK: the employee as returned by upstream
/// - 400 Bad Request: `Enter employee Id` for an absent body
pub async fn create_employee<G, E>(
    state: web::Data<AppState<G, E>>,
    body: Option<web::Json<Employee>>,
) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    let employee = body.map(web::Json::into_inner);
    match state.employee_service.create(employee).await {
        Ok(employee) => {
            log::info!("Employee created upstream with id {:?}", employee.id);
            HttpResponse::Ok().json(employee)
        }
        Err(error) => handle_domain_error(&error),
    }
}
