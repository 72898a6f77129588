//! Configuration loading
//!
//! Sources, from lowest to highest priority:
//! 1. built-in defaults
//! 2. `config/default.toml` (optional)
//! 3. `config/<environment>.toml` (optional)
//! 4. `EMS__*` environment variables, `__` separating nested keys,
//!    e.g. `EMS__UPSTREAM__API_TOKEN`

use config::{Config, ConfigError, File};
use std::path::Path;

use ems_shared::config::{AppConfig, Environment};

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "EMS";

/// Load configuration for the environment named by `ENVIRONMENT`
/// from files under the current directory
pub fn load() -> Result<AppConfig, ConfigError> {
    load_from(Path::new("."), Environment::from_env())
}

/// Load configuration for `environment`, resolving files relative to `root`
pub fn load_from(root: &Path, environment: Environment) -> Result<AppConfig, ConfigError> {
    let default_file = root.join("config/default");
    let environment_file = root.join(environment.config_file());

    Config::builder()
        .set_default("environment", environment.to_string())?
        .add_source(File::from(default_file).required(false))
        .add_source(File::from(environment_file).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?
        .try_deserialize()
}
