use crate::constants::env_vars::{ENV_PREFIX, ENV_SEPARATOR};
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod app;
pub mod defaults;
pub mod limits;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Load configuration from the config file and environment variables.
///
/// An explicit `path` must exist; otherwise the file is discovered with
/// [`setup::find_config_file`] and may be absent. Environment entries
/// override file values.
pub fn load_config(path: Option<&Path>) -> ConfigLoadResult {
    dotenv::dotenv().ok();
    load_config_from(path, true)
}

/// Load configuration from an optional file, optionally layering the environment.
pub fn load_config_from(path: Option<&Path>, include_env: bool) -> ConfigLoadResult {
    let mut builder = Config::builder();

    match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }
        None => match setup::find_config_file() {
            Some(found) => {
                log::debug!("Discovered configuration file {}", found.display());
                builder = builder.add_source(
                    File::from(found.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
            None => log::debug!("No configuration file found, using defaults"),
        },
    }

    if include_env {
        // environment entries override file values when present
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true),
        );
    }

    let config = match builder.build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => ConfigLoadResult::Success(Box::new(app_config)),
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub(crate) fn resolved(&self) -> Self {
        Self {
            level: Some(self.level().to_string()),
            file: self.file.clone(),
        }
    }
}
