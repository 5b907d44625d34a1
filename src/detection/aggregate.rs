//! Per-record and corpus-level aggregation of findings

use super::models::{Finding, ScanResult};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Stateless transforms from findings to summaries
#[derive(Debug, Clone, Copy, Default)]
pub struct FindingAggregator;

impl FindingAggregator {
    /// Summarize the findings of one record
    pub fn summarize(findings: Vec<Finding>) -> ScanResult {
        ScanResult::new(findings)
    }

    /// Summarize many records' scan results
    pub fn corpus_summary<'a, I>(results: I) -> CorpusSummary
    where
        I: IntoIterator<Item = &'a ScanResult>,
    {
        let mut summary = CorpusSummary::default();
        let mut sets: BTreeMap<BTreeSet<String>, usize> = BTreeMap::new();

        for result in results {
            summary.total_records += 1;
            summary.total_findings += result.total_count();

            if result.has_pii() {
                summary.records_with_pii += 1;
            } else {
                summary.records_without_pii += 1;
            }

            for (category, count) in result.category_counts() {
                *summary.category_counts.entry(category).or_insert(0) += count;
            }
            for category in result.distinct_categories() {
                *summary
                    .category_record_counts
                    .entry(category.clone())
                    .or_insert(0) += 1;
            }
            *sets.entry(result.distinct_categories().clone()).or_insert(0) += 1;
        }

        summary.category_sets = sets
            .into_iter()
            .map(|(categories, records)| CategorySetCount {
                categories: categories.into_iter().collect(),
                records,
            })
            .collect();
        summary
            .category_sets
            .sort_by(|a, b| b.records.cmp(&a.records).then_with(|| a.categories.cmp(&b.categories)));

        summary
    }
}

/// Number of records sharing exactly one set of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySetCount {
    /// Sorted category names; empty for records without PII
    pub categories: Vec<String>,
    /// Records whose distinct categories equal this set
    pub records: usize,
}

/// Corpus-level statistics over many scan results
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorpusSummary {
    /// Number of records summarized
    pub total_records: usize,
    /// Findings across all records
    pub total_findings: usize,
    /// Records with at least one finding
    pub records_with_pii: usize,
    /// Records with no finding
    pub records_without_pii: usize,
    /// Findings per category
    pub category_counts: BTreeMap<String, usize>,
    /// Records containing each category at least once
    pub category_record_counts: BTreeMap<String, usize>,
    /// Records per distinct category set, most frequent first
    pub category_sets: Vec<CategorySetCount>,
}

impl CorpusSummary {
    /// Average findings per record
    pub fn average_per_record(&self) -> f64 {
        if self.total_records == 0 {
            return 0.0;
        }
        self.total_findings as f64 / self.total_records as f64
    }

    /// Share of all findings belonging to `category`, in percent
    pub fn percentage(&self, category: &str) -> f64 {
        if self.total_findings == 0 {
            return 0.0;
        }
        let count = self.category_counts.get(category).copied().unwrap_or(0);
        count as f64 / self.total_findings as f64 * 100.0
    }

    /// Percentages for every category, sorted by category name
    pub fn percentages(&self) -> BTreeMap<String, f64> {
        self.category_counts
            .keys()
            .map(|category| (category.clone(), self.percentage(category)))
            .collect()
    }
}
