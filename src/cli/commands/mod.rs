//! CLI command implementations
//!
//! Commands return their process exit code: 0 on success, 2 for configuration
//! errors, 5 for fatal errors.

pub mod init;
pub mod patterns;
pub mod report;
pub mod scan;
pub mod validate;

use crate::config::{load_config, parse_config, TaggerConfig};
use crate::domain::result::Result;
use std::path::Path;

/// Exit code for configuration errors
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Exit code for fatal errors
pub const EXIT_FATAL: i32 = 5;

/// Load the configuration file, falling back to defaults when it is absent
///
/// Defaults still go through environment overrides and validation.
pub fn load_or_default(config_path: &str) -> Result<TaggerConfig> {
    if Path::new(config_path).exists() {
        load_config(config_path)
    } else {
        tracing::debug!(config_path = %config_path, "Configuration file not found, using defaults");
        parse_config("")
    }
}
