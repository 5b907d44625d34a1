//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the tagger using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// PII Tagger - regex-based PII detection and indexing for text datasets
#[derive(Parser, Debug)]
#[command(name = "pii-tagger")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "pii-tagger.toml", env = "PII_TAGGER_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "PII_TAGGER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tag text records with the PII they contain
    Scan(commands::scan::ScanArgs),

    /// Summarize a file of tagged records
    Report(commands::report::ReportArgs),

    /// List the categories of a pattern library
    Patterns(commands::patterns::PatternsArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Execute the selected command, returning the exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        match &self.command {
            Commands::Scan(args) => args.execute(&self.config),
            Commands::Report(args) => args.execute(&self.config),
            Commands::Patterns(args) => args.execute(&self.config),
            Commands::ValidateConfig(args) => args.execute(&self.config),
            Commands::Init(args) => args.execute(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::patterns::Domain;
    use commands::scan::OutputFormat;

    #[test]
    fn test_cli_parse_scan() {
        let cli = Cli::parse_from(["pii-tagger", "scan", "records.txt"]);
        assert_eq!(cli.config, "pii-tagger.toml");
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.input.unwrap().to_string_lossy(), "records.txt");
                assert_eq!(args.format, OutputFormat::Jsonl);
                assert!(!args.sort_by_position);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_scan_options() {
        let cli = Cli::parse_from([
            "pii-tagger",
            "scan",
            "--domain",
            "legal-prompt",
            "--format",
            "json",
            "--sort-by-position",
        ]);
        match cli.command {
            Commands::Scan(args) => {
                assert_eq!(args.domain, Some(Domain::LegalPrompt));
                assert_eq!(args.format, OutputFormat::Json);
                assert!(args.sort_by_position);
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_domain() {
        let result = Cli::try_parse_from(["pii-tagger", "patterns", "--domain", "retail"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["pii-tagger", "--config", "custom.toml", "patterns"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["pii-tagger", "--log-level", "debug", "validate-config"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_report() {
        let cli = Cli::parse_from(["pii-tagger", "report", "tagged.jsonl", "--format", "json"]);
        assert!(matches!(cli.command, Commands::Report(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["pii-tagger", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
