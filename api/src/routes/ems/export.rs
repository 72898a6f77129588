use actix_web::http::header::ContentType;
use actix_web::{web, HttpResponse};

use ems_core::errors::messages;
use ems_core::services::employee::{EmployeeExporter, EmployeeGateway};

use super::AppState;
use crate::handlers::error::handle_domain_error;

/// Handler for GET /EMS/ExportEmployeeList
///
/// Fetches the full employee list and writes it as CSV to the configured
/// export file, replacing any previous export.
///
/// # Response
/// - 200 OK: `Exported Successfully`
/// - 400 Bad Request: `Error occured` when the upstream body cannot be decoded
/// - 500 Internal Server Error: upstream or file system failure
pub async fn export_employee_list<G, E>(state: web::Data<AppState<G, E>>) -> HttpResponse
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    match state.employee_service.export().await {
        Ok(receipt) => {
            log::info!(
                "Exported {} employees to {}",
                receipt.rows,
                receipt.path.display()
            );
            HttpResponse::Ok()
                .content_type(ContentType::plaintext())
                .body(messages::EXPORTED)
        }
        Err(error) => handle_domain_error(&error),
    }
}
