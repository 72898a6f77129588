//! Configuration module
//!
//! Configuration is organised into the following sections:
//! - `environment` - Environment detection
//! - `server` - HTTP server and CORS configuration
//! - `upstream` - Remote employee API location and credentials
//! - `export` - CSV export destination

pub mod environment;
pub mod export;
pub mod server;
pub mod upstream;

use serde::{Deserialize, Serialize};

pub use environment::Environment;
pub use export::ExportConfig;
pub use server::{CorsConfig, ServerConfig};
pub use upstream::{NotFoundDetection, UpstreamConfig};

/// Complete application configuration, resolved once at startup and
/// read-only afterwards
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream employee API
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// CSV export destination
    #[serde(default)]
    pub export: ExportConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}
