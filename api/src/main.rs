use actix_web::{web, HttpServer};
use anyhow::Context;
use log::{info, warn};
use std::sync::Arc;

use ems_api::app::create_app;
use ems_api::config;
use ems_api::routes::ems::AppState;
use ems_core::services::employee::{EmployeeService, EmployeeServiceConfig};
use ems_infra::{CsvFileExporter, HttpEmployeeGateway};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting EMS API Server");

    let config = config::load().context("Failed to load configuration")?;
    info!(
        "Environment: {}, upstream: {}, not-found detection: {:?}",
        config.environment, config.upstream.base_url, config.upstream.not_found_detection
    );

    let gateway = HttpEmployeeGateway::new(config.upstream.clone())
        .context("Failed to create upstream client")?;
    let exporter = CsvFileExporter::from_config(&config.export);
    match exporter.path() {
        Ok(path) => info!("Employee exports will be written to {}", path.display()),
        Err(e) => warn!("Export location unavailable until resolved: {}", e),
    }

    let service = EmployeeService::new(
        Arc::new(gateway),
        Arc::new(exporter),
        EmployeeServiceConfig::from(&config.upstream),
    );
    let app_state = web::Data::new(AppState::new(service));

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let workers = config.server.workers;
    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await?;

    Ok(())
}
