//! Configuration schema types
//!
//! This module defines the configuration structure for the tagger. Every
//! section has defaults, so an empty file is a valid configuration.

use crate::detection::patterns::Domain;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main tagger configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaggerConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Scanner settings
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Corpus report settings
    #[serde(default)]
    pub report: ReportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl TaggerConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.scanner.validate()?;
        self.report.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Order in which findings are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ScanOrder {
    /// Grouped by category in registry order
    #[default]
    Registry,
    /// Sorted by position in the text
    Position,
}

/// Scanner configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannerConfig {
    /// Built-in domain library
    #[serde(default = "default_domain")]
    pub domain: Domain,

    /// Custom TOML pattern library replacing the built-in one
    #[serde(default)]
    pub pattern_library: Option<PathBuf>,

    /// Force case handling; unset keeps the library's own setting
    #[serde(default)]
    pub case_insensitive: Option<bool>,

    /// Finding order in output
    #[serde(default)]
    pub order: ScanOrder,

    /// Scan batches of records in parallel
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl ScannerConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!(
                    "scanner.pattern_library not found: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            pattern_library: None,
            case_insensitive: None,
            order: ScanOrder::default(),
            parallel: true,
        }
    }
}

/// Corpus report configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Sample findings shown from the first record
    #[serde(default = "default_max_samples")]
    pub max_samples: usize,

    /// Directory reports are written to
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

impl ReportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_samples == 0 {
            return Err("report.max_samples must be > 0".to_string());
        }
        Ok(())
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_samples: default_max_samples(),
            output_dir: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path must be set when local logging is enabled".to_string());
        }

        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_domain() -> Domain {
    Domain::Medical
}

fn default_true() -> bool {
    true
}

fn default_max_samples() -> usize {
    crate::detection::report::DEFAULT_MAX_SAMPLES
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
