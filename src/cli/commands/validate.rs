//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the configuration file and the pattern library it selects.

use super::EXIT_CONFIG_ERROR;
use crate::config::load_config;
use crate::detection::TaggingEngine;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let engine = match TaggingEngine::new(&config.scanner) {
            Ok(engine) => {
                println!("✅ Pattern library compiled");
                engine
            }
            Err(e) => {
                println!("❌ Pattern library is invalid");
                println!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Domain: {}", config.scanner.domain);
        match config.scanner.pattern_library {
            Some(ref path) => println!("  Pattern Library: {}", path.display()),
            None => println!("  Pattern Library: built-in"),
        }
        println!("  Categories: {}", engine.scanner().registry().len());
        println!(
            "  Case Insensitive: {}",
            engine.scanner().registry().is_case_insensitive()
        );
        println!("  Finding Order: {:?}", config.scanner.order);
        println!("  Parallel: {}", config.scanner.parallel);
        println!("  Report Samples: {}", config.report.max_samples);
        if let Some(ref dir) = config.report.output_dir {
            println!("  Report Directory: {}", dir.display());
        }
        println!("  File Logging: {}", config.logging.local_enabled);
        println!();

        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_missing_file() {
        let code = ValidateArgs {}
            .execute("no-such-dir/pii-tagger.toml")
            .unwrap();
        assert_eq!(code, EXIT_CONFIG_ERROR);
    }

    #[test]
    fn test_validate_valid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pii-tagger.toml");
        std::fs::write(&path, "[scanner]\ndomain = \"education\"\n").unwrap();

        let code = ValidateArgs {}.execute(path.to_str().unwrap()).unwrap();
        assert_eq!(code, 0);
    }
}
