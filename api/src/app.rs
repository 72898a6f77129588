//! Application factory
//!
//! Builds the Actix-web application from the shared state so that the
//! binary and the integration tests assemble exactly the same app.

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{middleware::Logger, web, App, HttpResponse};

use ems_core::services::employee::{EmployeeExporter, EmployeeGateway};
use ems_shared::config::AppConfig;

use crate::handlers::error::{not_found, query_error_handler};
use crate::middleware::cors::create_cors;
use crate::routes::ems::{self, AppState};

/// Create and configure the application with all dependencies
pub fn create_app<G, E>(
    app_state: web::Data<AppState<G, E>>,
    config: &AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    G: EmployeeGateway + 'static,
    E: EmployeeExporter + 'static,
{
    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        // Add middleware (the last one wrapped runs first)
        .wrap(Logger::default())
        .wrap(create_cors(config))
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // Employee management routes
        .configure(ems::configure::<G, E>)
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "ems-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
