//! CORS middleware configuration for cross-origin requests.
//!
//! Development and staging accept any origin. Production only accepts the
//! origins listed in `cors.allowed_origins`.

use actix_cors::Cors;
use actix_web::http::{header, Method};

use ems_shared::config::AppConfig;

/// Max age for preflight cache, in seconds
const MAX_AGE: usize = 3600;

/// Creates a CORS middleware instance configured for the current environment.
pub fn create_cors(config: &AppConfig) -> Cors {
    if config.is_production() {
        create_production_cors(&config.cors.allowed_origins)
    } else {
        create_development_cors()
    }
}

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

fn create_development_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(MAX_AGE)
}

fn create_production_cors(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(MAX_AGE);

    for origin in allowed_origins.iter().map(|s| s.trim()) {
        if !origin.is_empty() {
            log::info!("Adding allowed origin: {}", origin);
            cors = cors.allowed_origin(origin);
        }
    }

    cors
}
