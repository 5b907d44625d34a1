//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{ScanOrder, TaggerConfig};
use crate::domain::errors::TaggerError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into TaggerConfig
/// 4. Applies environment variable overrides (PII_TAGGER_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use pii_tagger::config::loader::load_config;
///
/// let config = load_config("pii-tagger.toml")?;
/// println!("Domain: {}", config.scanner.domain);
/// # Ok::<(), pii_tagger::domain::TaggerError>(())
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<TaggerConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TaggerError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        TaggerError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration from TOML text
///
/// Applies the same substitution, overrides and validation as [`load_config`].
pub fn parse_config(contents: &str) -> Result<TaggerConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: TaggerConfig = toml::from_str(&contents)
        .map_err(|e| TaggerError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

    config.validate().map_err(|e| {
        TaggerError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| TaggerError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(TaggerError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the PII_TAGGER_* prefix
///
/// Variables follow the pattern `PII_TAGGER_<SECTION>_<KEY>`, for example
/// `PII_TAGGER_SCANNER_DOMAIN`. Unparseable booleans and numbers are ignored;
/// an unknown domain or order is an error.
fn apply_env_overrides<F>(config: &mut TaggerConfig, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    // Application overrides
    if let Some(val) = lookup("PII_TAGGER_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Scanner overrides
    if let Some(val) = lookup("PII_TAGGER_SCANNER_DOMAIN") {
        config.scanner.domain = val.parse()?;
    }
    if let Some(val) = lookup("PII_TAGGER_SCANNER_PATTERN_LIBRARY") {
        config.scanner.pattern_library = Some(PathBuf::from(val));
    }
    if let Some(val) = lookup("PII_TAGGER_SCANNER_CASE_INSENSITIVE") {
        if let Ok(flag) = val.parse() {
            config.scanner.case_insensitive = Some(flag);
        }
    }
    if let Some(val) = lookup("PII_TAGGER_SCANNER_ORDER") {
        config.scanner.order = match val.to_lowercase().as_str() {
            "registry" => ScanOrder::Registry,
            "position" => ScanOrder::Position,
            other => {
                return Err(TaggerError::Configuration(format!(
                    "Invalid PII_TAGGER_SCANNER_ORDER '{other}'. Must be one of: registry, position"
                )))
            }
        };
    }
    if let Some(val) = lookup("PII_TAGGER_SCANNER_PARALLEL") {
        config.scanner.parallel = val.parse().unwrap_or(config.scanner.parallel);
    }

    // Report overrides
    if let Some(val) = lookup("PII_TAGGER_REPORT_MAX_SAMPLES") {
        if let Ok(samples) = val.parse() {
            config.report.max_samples = samples;
        }
    }
    if let Some(val) = lookup("PII_TAGGER_REPORT_OUTPUT_DIR") {
        config.report.output_dir = Some(PathBuf::from(val));
    }

    // Logging overrides
    if let Some(val) = lookup("PII_TAGGER_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(config.logging.local_enabled);
    }
    if let Some(val) = lookup("PII_TAGGER_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Some(val) = lookup("PII_TAGGER_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
