use std::path::Path;

use anyhow::Result;
use config::Config;
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_STEM, DEFAULT_PROD_ID, ENV_PREFIX};
use crate::types::TargetPlatform;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub generator: GeneratorSettings,
    pub logging: LoggingConfig,
}

/// Defaults applied to every ICS export.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    pub prod_id: String,
    pub include_timezone: bool,
    pub target_platform: TargetPlatform,
    pub method: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional TOML file and environment
    /// variables into a `Settings`. Environment variables take precedence over
    /// file values.
    ///
    /// When `file` is `None`, `icsforge.toml` in the working directory is used
    /// if it exists.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails,
    /// or if an explicitly named file does not exist.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let file_source = match file {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_STEM).required(false),
        };

        let settings = Config::builder()
            .set_default("generator.prod_id", DEFAULT_PROD_ID)?
            .set_default("generator.include_timezone", true)?
            .set_default("generator.target_platform", "generic")?
            .set_default("logging.level", "info")?
            // TOML file
            .add_source(file_source)
            // Env, e.g. ICSFORGE__GENERATOR__PROD_ID
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        tracing::debug!(settings = ?settings, "Settings resolved");

        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env` and the optional
/// config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(file: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    Settings::load(file)
}
