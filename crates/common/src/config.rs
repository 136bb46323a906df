//! Configuration management for the GPA engine.
//!
//! Settings are loaded from configuration files and environment variables.
//! The academic policy section holds the institution's unit limits; every
//! value has a default so an empty configuration is valid.
//!
//! ## Example Configuration
//!
//! ```toml
//! [policy]
//! min_semester_units = 18
//! max_semester_units = 24
//! min_cumulative_units = 24
//!
//! [telemetry]
//! json_logging = false
//! log_level = "info"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Academic policy limits
    #[serde(default)]
    pub policy: AcademicPolicy,
    /// Logging settings
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

/// Academic policy limits used by the constraint checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicPolicy {
    /// Fewest units a semester may carry
    #[serde(default = "default_min_semester_units")]
    pub min_semester_units: u32,

    /// Most units a semester may carry
    #[serde(default = "default_max_semester_units")]
    pub max_semester_units: u32,

    /// Cumulative units below which a carried-over CGPA is flagged as imprecise
    #[serde(default = "default_min_cumulative_units")]
    pub min_cumulative_units: u32,
}

/// Telemetry configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Enable JSON logging format
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// Default value functions
fn default_min_semester_units() -> u32 {
    18
}

fn default_max_semester_units() -> u32 {
    24
}

fn default_min_cumulative_units() -> u32 {
    24
}

fn default_json_logging() -> bool {
    false
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for AcademicPolicy {
    fn default() -> Self {
        Self {
            min_semester_units: default_min_semester_units(),
            max_semester_units: default_max_semester_units(),
            min_cumulative_units: default_min_cumulative_units(),
        }
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            json_logging: default_json_logging(),
            log_level: default_log_level(),
        }
    }
}

impl AcademicPolicy {
    /// Whether a semester total sits inside the allowed load
    pub fn is_within_semester_bounds(&self, total_units: u32) -> bool {
        (self.min_semester_units..=self.max_semester_units).contains(&total_units)
    }

    fn validate(&self) -> Result<()> {
        if self.min_semester_units == 0 {
            anyhow::bail!("Minimum semester units must be greater than 0");
        }

        if self.min_semester_units > self.max_semester_units {
            anyhow::bail!(
                "Minimum semester units ({}) cannot exceed maximum ({})",
                self.min_semester_units,
                self.max_semester_units
            );
        }

        Ok(())
    }
}

impl EngineConfig {
    /// Load configuration from configuration files and environment variables.
    ///
    /// Later sources override earlier ones:
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from GPA_ENV)
    /// 4. Environment variables (prefixed with GPA_)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use gpa_engine_common::config::EngineConfig;
    ///
    /// let config = EngineConfig::load().expect("Failed to load configuration");
    /// println!("Semester load: {}-{}", config.policy.min_semester_units, config.policy.max_semester_units);
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("GPA_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Example: GPA_POLICY__MAX_SEMESTER_UNITS=22
            .add_source(
                config::Environment::with_prefix("GPA")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let engine_config: EngineConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        engine_config.validate()?;

        Ok(engine_config)
    }

    /// Load configuration from a TOML file, ignoring the environment
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let engine_config: EngineConfig =
            toml::from_str(contents).context("Failed to parse config file")?;
        engine_config.validate()?;
        Ok(engine_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.policy.validate()?;

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                valid_log_levels.join(", ")
            );
        }

        Ok(())
    }
}
