//! Configuration management for the tagger.
//!
//! # Overview
//!
//! The tagger reads a TOML configuration file with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `PII_TAGGER_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pii_tagger::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pii-tagger.toml")?;
//! println!("Domain: {}", config.scanner.domain);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Application settings (log level)
//! - [`ScannerConfig`] - Domain library, case handling, finding order
//! - [`ReportConfig`] - Corpus report settings
//! - [`LoggingConfig`] - Logging configuration
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [scanner]
//! domain = "medical"
//! order = "registry"
//!
//! [report]
//! max_samples = 15
//! output_dir = "${PII_TAGGER_REPORT_DIR}"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, parse_config};
pub use schema::{
    ApplicationConfig, LoggingConfig, ReportConfig, ScanOrder, ScannerConfig, TaggerConfig,
};
