use actix_web::error::{InternalError, QueryPayloadError};
use actix_web::http::header::ContentType;
use actix_web::{HttpRequest, HttpResponse};

use ems_core::errors::DomainError;
use ems_shared::errors::{error_codes, ErrorResponse};

/// Convert a domain error into an HTTP response.
///
/// Client-side failures become `400 Bad Request` with the error message as a
/// plain-text body. Everything else is an unhandled failure and becomes
/// `500 Internal Server Error` with a JSON [`ErrorResponse`].
pub fn handle_domain_error(error: &DomainError) -> HttpResponse {
    if error.is_client_error() {
        log::warn!("Request rejected: {}", error);
        return HttpResponse::BadRequest()
            .content_type(ContentType::plaintext())
            .body(error.to_string());
    }

    log::error!("Request failed: {}", error);

    let response = match error {
        DomainError::Upstream { status, reason } => {
            ErrorResponse::new(error_codes::UPSTREAM_ERROR, error.to_string())
                .add_detail("upstream_status", status)
                .add_detail("upstream_reason", reason)
        }
        DomainError::Transport { .. } => {
            ErrorResponse::new(error_codes::UPSTREAM_UNAVAILABLE, error.to_string())
        }
        DomainError::Export { .. } => {
            ErrorResponse::new(error_codes::EXPORT_FAILED, error.to_string())
        }
        _ => ErrorResponse::new(error_codes::INTERNAL_ERROR, error.to_string()),
    };

    HttpResponse::InternalServerError().json(response)
}

/// Error handler for query string extraction, e.g. a non-integer `id`
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    log::warn!("Invalid query string for {}: {}", req.path(), err);

    let response = HttpResponse::BadRequest().json(
        ErrorResponse::new(error_codes::INVALID_QUERY, err.to_string())
            .add_detail("path", req.path()),
    );
    InternalError::from_response(err, response).into()
}

/// Default handler for unmatched routes
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
