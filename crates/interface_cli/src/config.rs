//! CLI configuration

use clap::ValueEnum;
use serde::Deserialize;

/// Environment variable prefix, e.g. `HIVCODE_LOG_LEVEL`
pub const ENV_PREFIX: &str = "HIVCODE";

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain text, one value per line
    #[default]
    Text,
    /// A single JSON document
    Json,
}

/// How log events are written to stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Log level or filter directive
    pub log_level: String,
    /// Log output format
    pub log_format: LogFormat,
    /// Result output format
    pub output: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            output: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the process environment
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit set of environment variables
    pub fn from_vars<I>(vars: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let source: config::Map<String, String> = vars.into_iter().collect();
        Self::load(config::Environment::with_prefix(ENV_PREFIX).source(Some(source)))
    }

    fn load(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_format", "pretty")?
            .set_default("output", "text")?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Applies command-line overrides on top of the loaded values
    pub fn with_overrides(
        mut self,
        log_level: Option<&str>,
        log_format: Option<LogFormat>,
        output: Option<OutputFormat>,
    ) -> Self {
        if let Some(level) = log_level {
            self.log_level = level.to_string();
        }
        if let Some(format) = log_format {
            self.log_format = format;
        }
        if let Some(output) = output {
            self.output = output;
        }
        self
    }
}
