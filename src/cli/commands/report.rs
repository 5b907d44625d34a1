//! Report command implementation
//!
//! This module implements the `report` command, which summarizes a JSON-lines
//! file of tagged records.

use super::{load_or_default, EXIT_CONFIG_ERROR};
use crate::detection::models::TaggedRecord;
use crate::detection::patterns::Domain;
use crate::detection::report::CorpusReport;
use anyhow::Context;
use chrono::Utc;
use clap::{Args, ValueEnum};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Report rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable text
    Console,
    /// Pretty-printed JSON
    Json,
}

/// Arguments for the report command
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// JSON-lines file of tagged records (output of `scan`)
    pub input: PathBuf,

    /// Domain label for the report; defaults to the domain recorded on the records
    #[arg(short, long)]
    pub domain: Option<Domain>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "console")]
    pub format: ReportFormat,

    /// Write the JSON report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the number of sample findings
    #[arg(long)]
    pub max_samples: Option<usize>,
}

impl ReportArgs {
    /// Execute the report command
    ///
    /// The report goes to stdout; status and error lines go to stderr.
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.run(config_path, &mut stdout.lock(), &mut stderr.lock())
    }

    fn run(
        &self,
        config_path: &str,
        out: &mut impl Write,
        status: &mut impl Write,
    ) -> anyhow::Result<i32> {
        let config = match load_or_default(config_path) {
            Ok(c) => c,
            Err(e) => {
                writeln!(status, "❌ Failed to load configuration file")?;
                writeln!(status, "   Error: {e}")?;
                return Ok(EXIT_CONFIG_ERROR);
            }
        };

        let content = std::fs::read_to_string(&self.input)
            .with_context(|| format!("Failed to read {}", self.input.display()))?;
        let records = parse_records(&content)?;

        let domain = report_domain(self.domain, &records, config.scanner.domain);
        let max_samples = self.max_samples.unwrap_or(config.report.max_samples);
        let report = CorpusReport::from_records(domain.as_str(), &records, max_samples);

        match self.format {
            ReportFormat::Console => write!(out, "{}", report.format_console())?,
            ReportFormat::Json => writeln!(out, "{}", report.format_json()?)?,
        }

        let target = self.output.clone().or_else(|| {
            config
                .report
                .output_dir
                .as_deref()
                .map(|dir| default_report_path(dir, &domain))
        });

        if let Some(path) = target {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            report
                .write_to_file(&path)
                .with_context(|| format!("Failed to write report {}", path.display()))?;
            tracing::info!(path = %path.display(), "Report written");
            writeln!(status, "✅ Report saved: {}", path.display())?;
        }

        Ok(0)
    }
}

/// Label for the report
///
/// An explicit domain wins. Otherwise the domain recorded on the records is
/// used, `mixed` when they disagree, and the configured domain when none is
/// recorded.
fn report_domain(explicit: Option<Domain>, records: &[TaggedRecord], configured: Domain) -> String {
    if let Some(domain) = explicit {
        return domain.to_string();
    }

    let recorded: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| r.domain.as_ref())
        .map(Domain::as_str)
        .collect();

    match recorded.len() {
        0 => configured.to_string(),
        1 => recorded.into_iter().map(str::to_string).collect(),
        _ => "mixed".to_string(),
    }
}

/// Parse JSON-lines tagged records, skipping blank lines
fn parse_records(content: &str) -> anyhow::Result<Vec<TaggedRecord>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            serde_json::from_str(line).with_context(|| format!("Invalid record on line {}", i + 1))
        })
        .collect()
}

fn default_report_path(dir: &Path, domain: &str) -> PathBuf {
    let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
    dir.join(format!("{domain}_summary_{timestamp}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScannerConfig;
    use crate::detection::TaggingEngine;

    #[test]
    fn test_parse_records() {
        let engine = TaggingEngine::new(&ScannerConfig::default()).unwrap();
        let record = engine.tag("R-1", "SSN 123-45-6789");
        let line = serde_json::to_string(&record).unwrap();
        let content = format!("{line}\n\n{line}\n");

        let records = parse_records(&content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].pii_findings, record.pii_findings);
    }

    #[test]
    fn test_parse_records_reports_line() {
        let err = parse_records("\nnot json\n").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_default_report_path() {
        let path = default_report_path(Path::new("out"), "legal");
        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("legal_summary_"));
        assert!(name.ends_with(".json"));
    }

    fn legal_records_file(dir: &Path) -> PathBuf {
        let engine = TaggingEngine::new(&ScannerConfig {
            domain: Domain::Legal,
            ..ScannerConfig::default()
        })
        .unwrap();
        let lines: Vec<String> = ["Case CV-2024-1234 opened", "no identifiers"]
            .iter()
            .enumerate()
            .map(|(i, text)| serde_json::to_string(&engine.tag(format!("LEG-{i}"), *text)).unwrap())
            .collect();

        let path = dir.join("tagged.jsonl");
        std::fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn test_json_report_keeps_stdout_clean() {
        let dir = tempfile::tempdir().unwrap();
        let saved = dir.path().join("reports").join("legal.json");
        let args = ReportArgs {
            input: legal_records_file(dir.path()),
            domain: None,
            format: ReportFormat::Json,
            output: Some(saved.clone()),
            max_samples: None,
        };

        let mut out = Vec::new();
        let mut status = Vec::new();
        let code = args
            .run("missing-pii-tagger.toml", &mut out, &mut status)
            .unwrap();

        assert_eq!(code, 0);
        let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(report["domain"], "legal");
        assert_eq!(report["total_records"], 2);
        assert!(String::from_utf8(status).unwrap().contains("Report saved"));
        assert!(saved.exists());
    }

    #[test]
    fn test_config_error_goes_to_status() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("pii-tagger.toml");
        std::fs::write(&config_path, "[report]\nmax_samples = 0\n").unwrap();
        let args = ReportArgs {
            input: legal_records_file(dir.path()),
            domain: None,
            format: ReportFormat::Json,
            output: None,
            max_samples: None,
        };

        let mut out = Vec::new();
        let mut status = Vec::new();
        let code = args
            .run(config_path.to_str().unwrap(), &mut out, &mut status)
            .unwrap();

        assert_eq!(code, EXIT_CONFIG_ERROR);
        assert!(out.is_empty());
        assert!(String::from_utf8(status).unwrap().contains("Failed to load configuration"));
    }

    #[test]
    fn test_report_domain_precedence() {
        let legal = TaggedRecord::new("1", "", Default::default()).with_domain(Domain::Legal);
        let medical = TaggedRecord::new("2", "", Default::default()).with_domain(Domain::Medical);
        let untagged = TaggedRecord::new("3", "", Default::default());

        assert_eq!(
            report_domain(Some(Domain::Education), &[legal.clone()], Domain::Medical),
            "education"
        );
        assert_eq!(
            report_domain(None, &[legal.clone(), untagged.clone()], Domain::Medical),
            "legal"
        );
        assert_eq!(report_domain(None, &[legal, medical], Domain::Financial), "mixed");
        assert_eq!(report_domain(None, &[untagged], Domain::Financial), "financial");
    }
}
