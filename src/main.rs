// PII Tagger - PII detection and indexing for synthetic text datasets
// Copyright (c) 2025 PII Tagger Contributors
// Licensed under the MIT License

use clap::Parser;
use pii_tagger::cli::commands::{load_or_default, EXIT_FATAL};
use pii_tagger::cli::Cli;
use pii_tagger::config::LoggingConfig;
use pii_tagger::logging::init_logging;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Logging settings come from the config file when it loads; commands
    // report configuration errors themselves
    let config = load_or_default(&cli.config).ok();
    let log_level = cli
        .log_level
        .clone()
        .or_else(|| config.as_ref().map(|c| c.application.log_level.clone()))
        .unwrap_or_else(|| "info".to_string());
    let logging_config: LoggingConfig = config.map(|c| c.logging).unwrap_or_default();

    let guard = match init_logging(&log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(EXIT_FATAL);
        }
    };

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "PII Tagger");

    let exit_code = match cli.execute() {
        Ok(code) => code,
        Err(e) => {
            pii_tagger::log_error_with_context!(&e, "Command execution failed");
            eprintln!("Error: {e:#}");
            EXIT_FATAL
        }
    };

    drop(guard);
    process::exit(exit_code);
}
