//! Scan command implementation
//!
//! This module implements the `scan` command, which tags text records read
//! from a file or stdin and prints them as JSON.

use super::{load_or_default, EXIT_CONFIG_ERROR};
use crate::config::ScanOrder;
use crate::detection::models::TaggedRecord;
use crate::detection::patterns::Domain;
use crate::detection::TaggingEngine;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::io::Read;
use std::path::PathBuf;

/// Output format for tagged records
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON array
    Json,
    /// One JSON record per line
    Jsonl,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Input file; reads stdin when omitted or `-`
    pub input: Option<PathBuf>,

    /// Override the configured domain
    #[arg(short, long)]
    pub domain: Option<Domain>,

    /// Treat the whole input as a single record instead of one per line
    #[arg(long)]
    pub whole: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "jsonl")]
    pub format: OutputFormat,

    /// Order findings by position instead of by category
    #[arg(long)]
    pub sort_by_position: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Prefix for generated record ids
    #[arg(long, default_value = "REC")]
    pub id_prefix: String,
}

impl ScanArgs {
    /// Execute the scan command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration file");
                eprintln!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        if let Some(domain) = self.domain {
            config.scanner.domain = domain;
        }
        if self.sort_by_position {
            config.scanner.order = ScanOrder::Position;
        }

        let engine = match TaggingEngine::new(&config.scanner) {
            Ok(engine) => engine,
            Err(e) => {
                eprintln!("❌ Failed to build pattern registry");
                eprintln!("   Error: {e}");
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let input = self.read_input()?;
        let records = split_records(&input, self.whole, &self.id_prefix);
        tracing::info!(
            domain = %engine.domain(),
            records = records.len(),
            "Scanning records"
        );

        let tagged = engine.tag_batch(&records);
        let output = format_records(&tagged, self.format)?;

        match self.output {
            Some(ref path) => {
                std::fs::write(path, output)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                eprintln!("✅ Tagged {} records → {}", tagged.len(), path.display());
            }
            None => print!("{output}"),
        }

        Ok(0)
    }

    fn read_input(&self) -> anyhow::Result<String> {
        match self.input {
            Some(ref path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input {}", path.display())),
            _ => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read stdin")?;
                Ok(buffer)
            }
        }
    }
}

/// Split input into `(id, text)` records
///
/// Blank lines are skipped; ids number the remaining records from 1.
fn split_records(input: &str, whole: bool, prefix: &str) -> Vec<(String, String)> {
    let texts: Vec<&str> = if whole {
        if input.trim().is_empty() {
            Vec::new()
        } else {
            vec![input]
        }
    } else {
        input.lines().filter(|l| !l.trim().is_empty()).collect()
    };

    texts
        .into_iter()
        .enumerate()
        .map(|(i, text)| (format!("{prefix}-{:06}", i + 1), text.to_string()))
        .collect()
}

fn format_records(records: &[TaggedRecord], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(records).map(|json| json + "\n"),
        OutputFormat::Jsonl => {
            let mut output = String::new();
            for record in records {
                output.push_str(&serde_json::to_string(record)?);
                output.push('\n');
            }
            Ok(output)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScannerConfig;

    #[test]
    fn test_split_lines() {
        let records = split_records("first\n\n  \nsecond\n", false, "MED");
        assert_eq!(
            records,
            vec![
                ("MED-000001".to_string(), "first".to_string()),
                ("MED-000002".to_string(), "second".to_string()),
            ]
        );
    }

    #[test]
    fn test_split_whole() {
        let records = split_records("line one\nline two\n", true, "DOC");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].1, "line one\nline two\n");
        assert!(split_records("   \n", true, "DOC").is_empty());
    }

    #[test]
    fn test_format_jsonl() {
        let engine = TaggingEngine::new(&ScannerConfig::default()).unwrap();
        let records = engine.tag_batch(&split_records("SSN 123-45-6789\nnone\n", false, "R"));
        let output = format_records(&records, OutputFormat::Jsonl).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: TaggedRecord = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first.id, "R-000001");
        assert!(first.unique_pii_types.contains(&"SSN".to_string()));
    }

    #[test]
    fn test_format_json_array() {
        let engine = TaggingEngine::new(&ScannerConfig::default()).unwrap();
        let records = engine.tag_batch(&split_records("a\nb\n", false, "R"));
        let output = format_records(&records, OutputFormat::Json).unwrap();
        let parsed: Vec<TaggedRecord> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed.len(), 2);
    }
}
