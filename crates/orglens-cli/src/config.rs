//! Configuration loading from TOML and environment variables.
//!
//! The analyzer reads its configuration from:
//! 1. A TOML config file (default: config/orglens.toml)
//! 2. Environment variables (override TOML values)
//!
//! Environment variable prefix: ORGLENS_
//!
//! Every value is independently defaultable: absent keys default
//! per-field, an unreadable or unparsable file falls back to full defaults
//! with a warning, and an unparsable env override is ignored.

use std::path::Path;

use serde::{Deserialize, Serialize};

use orglens_analyze::{DepthPolicy, SalaryPolicy};
use orglens_model::{
    DEFAULT_MAX_REPORTING_DEPTH, DEFAULT_MAX_SALARY_MULTIPLIER, DEFAULT_MIN_SALARY_MULTIPLIER,
};

/// Top-level analyzer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Salary-band configuration.
    #[serde(default)]
    pub salary: SalaryConfig,
    /// Reporting-depth configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Salary-band section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// Minimum multiplier over the subordinate average (1.20 = at least 20% more).
    #[serde(default = "default_min_multiplier")]
    pub min_multiplier: f64,
    /// Maximum multiplier over the subordinate average (1.50 = at most 50% more).
    #[serde(default = "default_max_multiplier")]
    pub max_multiplier: f64,
}

/// Reporting-depth section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Maximum managers allowed between an employee and the root.
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

/// Logging section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "orglens=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

// -- Defaults --

fn default_min_multiplier() -> f64 {
    DEFAULT_MIN_SALARY_MULTIPLIER
}
fn default_max_multiplier() -> f64 {
    DEFAULT_MAX_SALARY_MULTIPLIER
}
fn default_max_depth() -> u32 {
    DEFAULT_MAX_REPORTING_DEPTH
}
fn default_log_level() -> String {
    "info".to_string()
}

// -- Trait impls --

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            salary: SalaryConfig::default(),
            reporting: ReportingConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            min_multiplier: default_min_multiplier(),
            max_multiplier: default_max_multiplier(),
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AnalyzerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)?;
        let config: AnalyzerConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a TOML file, with environment variable
    /// overrides. A missing or unparsable file logs a warning and falls
    /// back to defaults; configuration never aborts the run.
    pub fn load(path: Option<&Path>) -> Self {
        let mut config = match path {
            Some(path) if path.exists() => match Self::from_file(path) {
                Ok(config) => config,
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "Config file unreadable, using defaults"
                    );
                    Self::default()
                }
            },
            Some(path) => {
                tracing::warn!(
                    path = %path.display(),
                    "Config file not found, using defaults"
                );
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config
    }

    /// Apply environment variable overrides. Unparsable values are ignored.
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ORGLENS_MIN_SALARY_MULTIPLIER") {
            if let Ok(v) = val.parse() {
                self.salary.min_multiplier = v;
            }
        }
        if let Ok(val) = std::env::var("ORGLENS_MAX_SALARY_MULTIPLIER") {
            if let Ok(v) = val.parse() {
                self.salary.max_multiplier = v;
            }
        }
        if let Ok(val) = std::env::var("ORGLENS_MAX_REPORTING_DEPTH") {
            if let Ok(v) = val.parse() {
                self.reporting.max_depth = v;
            }
        }
        if let Ok(val) = std::env::var("ORGLENS_LOG_LEVEL") {
            self.logging.level = val;
        }
    }

    pub fn salary_policy(&self) -> SalaryPolicy {
        SalaryPolicy::new(self.salary.min_multiplier, self.salary.max_multiplier)
    }

    pub fn depth_policy(&self) -> DepthPolicy {
        DepthPolicy::new(self.reporting.max_depth)
    }
}
