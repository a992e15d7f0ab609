//! Configuration management module.
//!
//! Supports loading configuration from:
//! - TOML files (config/default.toml, config/{profile}.toml, `--config <file>`)
//! - Environment variables with `MOBILE_NUMGEN__<SECTION>__<KEY>` pattern
//! - Command-line flags, which win over everything else

mod generator;
mod output;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use generator::GeneratorConfig;
pub use output::{OutputConfig, ReportFormat};

use crate::cli::Cli;

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Number generation configuration.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Spreadsheet output configuration.
    #[serde(default)]
    pub output: OutputConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Load configuration from files, environment and command line.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{MOBILE_NUMGEN_PROFILE}.toml` (profile defaults to `development`)
    /// 3. The file given with `--config`
    /// 4. Environment variables with `MOBILE_NUMGEN__` prefix
    /// 5. Command-line flags
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        Self::load_with_env(cli, environment())
    }

    /// Load configuration with an explicit environment source.
    fn load_with_env(cli: &Cli, env: Environment) -> Result<Self, ConfigError> {
        // Determine profile
        let profile =
            std::env::var("MOBILE_NUMGEN_PROFILE").unwrap_or_else(|_| "development".to_string());

        let mut builder = Config::builder()
            // Load default configuration
            .add_source(File::with_name("config/default").required(false))
            // Load profile-specific configuration
            .add_source(File::with_name(&format!("config/{profile}")).required(false));

        if let Some(path) = &cli.config {
            builder = builder.add_source(File::from(path.clone()).required(true));
        }

        let config = builder
            // Override with environment variables
            // MOBILE_NUMGEN__GENERATOR__COUNT=500 -> generator.count = 500
            .add_source(env)
            .build()?;

        let mut app_config: Self = config.try_deserialize()?;
        cli.apply(&mut app_config);
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.generator.validate()?;
        self.output.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got {:?}",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Environment variables with the `MOBILE_NUMGEN__` prefix.
///
/// Values stay strings so digit strings such as a `019` prefix keep their
/// leading zeros; numeric fields are converted during deserialization.
fn environment() -> Environment {
    Environment::with_prefix("MOBILE_NUMGEN")
        .separator("__")
        .try_parsing(false)
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}
