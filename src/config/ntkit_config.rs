// src/config/ntkit_config.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Command-line configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NtkitConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Output formatting
    pub output: OutputConfig,

    /// Sieve defaults
    pub sieve: SieveConfig,

    /// Trial division defaults
    pub trial_division: TrialDivisionConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// `text` or `json`
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Limit used by `sieve` when none is given (default: 100)
    pub default_limit: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrialDivisionConfig {
    /// Largest candidate tried by `spd` when no bound is given (default: unbounded)
    pub bound: Option<u64>,
}

impl Default for NtkitConfig {
    fn default() -> Self {
        NtkitConfig {
            log_level: "info".to_string(),
            output: OutputConfig::default(),
            sieve: SieveConfig::default(),
            trial_division: TrialDivisionConfig::default(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig { default_limit: 100 }
    }
}

impl NtkitConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("ntkit.toml").exists() {
            builder = builder.add_source(File::with_name("ntkit.toml"));
        } else if Path::new("ntkit.yaml").exists() {
            builder = builder.add_source(File::with_name("ntkit.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("output.format", "text")?
            .set_default("sieve.default_limit", 100)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // NTKIT_LOG_LEVEL, NTKIT_SIEVE__DEFAULT_LIMIT, ...
        let builder = builder.add_source(
            Environment::with_prefix("NTKIT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
