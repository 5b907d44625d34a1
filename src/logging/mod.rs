//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Configurable log levels
//! - JSON-formatted local file logs with rotation
//!
//! # Example
//!
//! ```no_run
//! use pii_tagger::logging::init_logging;
//! use pii_tagger::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config)?;
//!
//! tracing::info!("Tagger started");
//! # Ok::<(), pii_tagger::domain::TaggerError>(())
//! ```

pub mod structured;

pub use structured::{init_logging, LoggingGuard};

/// Log the completion of a scan over a batch of records
///
/// # Example
///
/// ```no_run
/// use pii_tagger::log_scan_complete;
/// use std::time::Duration;
///
/// log_scan_complete!(500, 4210, Duration::from_millis(85));
/// ```
#[macro_export]
macro_rules! log_scan_complete {
    ($records:expr, $findings:expr, $duration:expr) => {
        tracing::info!(
            records = $records,
            findings = $findings,
            duration_ms = $duration.as_millis() as u64,
            "Scan completed"
        );
    };
}

/// Log a template field replaced by the placeholder value
///
/// # Example
///
/// ```no_run
/// use pii_tagger::log_template_fallback;
///
/// log_template_fallback!("school_name");
/// ```
#[macro_export]
macro_rules! log_template_fallback {
    ($field:expr) => {
        tracing::warn!(
            field = %$field,
            placeholder = $crate::detection::template::PLACEHOLDER,
            "Template field missing, substituting placeholder"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use pii_tagger::log_error_with_context;
/// use pii_tagger::domain::TaggerError;
///
/// let error = TaggerError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
