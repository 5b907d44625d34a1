//! Corpus reporting for tagged datasets
//!
//! This module provides formatted reports showing PII distribution across a
//! corpus, category co-occurrence, and sample findings.

use super::aggregate::{CategorySetCount, CorpusSummary, FindingAggregator};
use super::models::{Finding, TaggedRecord};
use serde::Serialize;
use std::path::Path;

/// Default number of sample findings shown from the first record
pub const DEFAULT_MAX_SAMPLES: usize = 15;

/// Corpus report with PII statistics
#[derive(Debug, Clone, Serialize)]
pub struct CorpusReport {
    /// Domain the records belong to
    pub domain: String,

    /// Total records analyzed
    pub total_records: usize,

    /// Total PII findings
    pub total_findings: usize,

    /// Average findings per record
    pub average_per_record: f64,

    /// Records with at least one finding
    pub records_with_pii: usize,

    /// Records without findings
    pub records_without_pii: usize,

    /// Findings per category, sorted by category name
    pub distribution: Vec<CategoryShare>,

    /// Records per distinct category set
    pub category_sets: Vec<CategorySetCount>,

    /// Sample findings from the first record
    pub samples: Vec<Finding>,
}

/// One category's share of all findings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    /// Category name
    pub category: String,
    /// Findings of this category
    pub count: usize,
    /// Share of all findings, in percent
    pub percentage: f64,
    /// Records containing this category
    pub records: usize,
}

impl CorpusReport {
    /// Build a report from tagged records
    pub fn from_records(domain: impl Into<String>, records: &[TaggedRecord], max_samples: usize) -> Self {
        let results: Vec<_> = records.iter().map(TaggedRecord::scan_result).collect();
        let summary = FindingAggregator::corpus_summary(&results);
        let samples = records
            .first()
            .map(|r| r.pii_findings.iter().take(max_samples).cloned().collect())
            .unwrap_or_default();

        Self::from_summary(domain, &summary, samples)
    }

    /// Build a report from an existing summary
    pub fn from_summary(domain: impl Into<String>, summary: &CorpusSummary, samples: Vec<Finding>) -> Self {
        let distribution = summary
            .category_counts
            .iter()
            .map(|(category, count)| CategoryShare {
                category: category.clone(),
                count: *count,
                percentage: summary.percentage(category),
                records: summary
                    .category_record_counts
                    .get(category)
                    .copied()
                    .unwrap_or(0),
            })
            .collect();

        Self {
            domain: domain.into(),
            total_records: summary.total_records,
            total_findings: summary.total_findings,
            average_per_record: summary.average_per_record(),
            records_with_pii: summary.records_with_pii,
            records_without_pii: summary.records_without_pii,
            distribution,
            category_sets: summary.category_sets.clone(),
            samples,
        }
    }

    /// Format report for console output
    pub fn format_console(&self) -> String {
        let mut output = String::new();

        output.push('\n');
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push_str("                    PII CORPUS ANALYSIS REPORT                 \n");
        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output.push_str("📊 SUMMARY\n");
        output.push_str("───────────────────────────────────────────────────────────────\n");
        output.push_str(&format!("  Domain:                      {}\n", self.domain));
        output.push_str(&format!("  Total Records:               {}\n", self.total_records));
        output.push_str(&format!("  Records with PII:            {}\n", self.records_with_pii));
        output.push_str(&format!(
            "  Records without PII:         {}\n",
            self.records_without_pii
        ));
        output.push_str(&format!("  Total PII Instances Found:   {}\n", self.total_findings));
        output.push_str(&format!(
            "  Average PII per Record:      {:.2}\n",
            self.average_per_record
        ));
        output.push('\n');

        if !self.distribution.is_empty() {
            output.push_str("🔍 PII TYPE DISTRIBUTION\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for share in &self.distribution {
                output.push_str(&format!(
                    "  {:30} {:>6} ({:>5.1}%)  in {} records\n",
                    share.category, share.count, share.percentage, share.records
                ));
            }
            output.push('\n');
        }

        if !self.category_sets.is_empty() {
            output.push_str("🧩 CATEGORY COMBINATIONS\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for set in self.category_sets.iter().take(10) {
                let label = if set.categories.is_empty() {
                    "(no PII)".to_string()
                } else {
                    set.categories.join(", ")
                };
                output.push_str(&format!("  {:>6}  {}\n", set.records, label));
            }
            output.push('\n');
        }

        if !self.samples.is_empty() {
            output.push_str("📝 SAMPLE PII FINDINGS FROM FIRST RECORD\n");
            output.push_str("───────────────────────────────────────────────────────────────\n");
            for finding in &self.samples {
                output.push_str(&format!(
                    "  Type: {}, Value: {}, Position: {}-{}\n",
                    finding.category, finding.value, finding.start_index, finding.end_index
                ));
            }
            output.push('\n');
        }

        output.push_str("═══════════════════════════════════════════════════════════════\n");
        output.push('\n');

        output
    }

    /// Format report as JSON
    pub fn format_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write report to file as JSON
    pub fn write_to_file(&self, path: &Path) -> std::io::Result<()> {
        let json = self.format_json().map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::models::ScanResult;

    fn records() -> Vec<TaggedRecord> {
        vec![
            TaggedRecord::new(
                "R1",
                "a@b.io 123-45-6789 c@d.io",
                ScanResult::new(vec![
                    Finding::new("EMAIL", "a@b.io", 0, 6),
                    Finding::new("EMAIL", "c@d.io", 19, 25),
                    Finding::new("SSN", "123-45-6789", 7, 18),
                ]),
            ),
            TaggedRecord::new(
                "R2",
                "SSN 987-65-4321",
                ScanResult::new(vec![Finding::new("SSN", "987-65-4321", 4, 15)]),
            ),
            TaggedRecord::new("R3", "nothing", ScanResult::default()),
        ]
    }

    #[test]
    fn test_report_from_records() {
        let report = CorpusReport::from_records("medical", &records(), DEFAULT_MAX_SAMPLES);

        assert_eq!(report.total_records, 3);
        assert_eq!(report.total_findings, 4);
        assert_eq!(report.records_without_pii, 1);
        assert_eq!(report.distribution.len(), 2);
        assert_eq!(report.distribution[0].category, "EMAIL");
        assert_eq!(report.distribution[0].count, 2);
        assert!((report.distribution[0].percentage - 50.0).abs() < 1e-9);
        assert_eq!(report.distribution[1].records, 2);
        assert_eq!(report.samples.len(), 3);
    }

    #[test]
    fn test_samples_limited() {
        let report = CorpusReport::from_records("medical", &records(), 1);
        assert_eq!(report.samples.len(), 1);
        assert_eq!(report.samples[0].category, "EMAIL");
    }

    #[test]
    fn test_format_console() {
        let report = CorpusReport::from_records("legal", &records(), DEFAULT_MAX_SAMPLES);
        let console = report.format_console();

        assert!(console.contains("PII CORPUS ANALYSIS REPORT"));
        assert!(console.contains("Total Records:               3"));
        assert!(console.contains("Average PII per Record:      1.33"));
        assert!(console.contains("(no PII)"));
        assert!(console.contains("Type: SSN, Value: 123-45-6789, Position: 7-18"));
    }

    #[test]
    fn test_empty_report() {
        let report = CorpusReport::from_records("legal", &[], DEFAULT_MAX_SAMPLES);
        let console = report.format_console();
        assert!(console.contains("Average PII per Record:      0.00"));
        assert!(!console.contains("PII TYPE DISTRIBUTION"));
    }

    #[test]
    fn test_write_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let report = CorpusReport::from_records("financial", &records(), DEFAULT_MAX_SAMPLES);

        report.write_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json["total_findings"], 4);
        assert_eq!(json["distribution"][1]["category"], "SSN");
    }
}
