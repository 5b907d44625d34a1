//! Finding and scan result data models

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// One matched occurrence of one category at one text span
///
/// Offsets count characters (Unicode scalar values), not bytes, and
/// `end_index` is exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Category of PII
    #[serde(rename = "pii_type")]
    pub category: String,
    /// Exact matched substring
    pub value: String,
    /// Start offset in characters
    pub start_index: usize,
    /// End offset in characters (exclusive)
    pub end_index: usize,
    /// Match length in characters
    pub length: usize,
}

impl Finding {
    /// Create a new finding from a category, matched value and character span
    pub fn new(
        category: impl Into<String>,
        value: impl Into<String>,
        start_index: usize,
        end_index: usize,
    ) -> Self {
        Self {
            category: category.into(),
            value: value.into(),
            start_index,
            end_index,
            length: end_index.saturating_sub(start_index),
        }
    }

    /// Slice the finding's span out of the source text
    ///
    /// Returns `None` if the span lies outside `text`.
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let start = char_to_byte(text, self.start_index)?;
        let end = char_to_byte(text, self.end_index)?;
        text.get(start..end)
    }

    /// Check whether two findings share at least one character
    pub fn overlaps(&self, other: &Finding) -> bool {
        self.start_index < other.end_index && other.start_index < self.end_index
    }
}

fn char_to_byte(text: &str, char_index: usize) -> Option<usize> {
    if char_index == 0 {
        return Some(0);
    }
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(char_index)
}

/// Findings of one scan plus their per-record summary
///
/// Findings keep discovery order: grouped by category in registry order, then
/// left to right within a category. The summary is derived from the findings
/// when the result is built and cannot drift from them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    findings: Vec<Finding>,
    total_count: usize,
    distinct_categories: BTreeSet<String>,
}

impl ScanResult {
    /// Build a result from a finding sequence
    pub fn new(findings: Vec<Finding>) -> Self {
        let distinct_categories = findings.iter().map(|f| f.category.clone()).collect();
        Self {
            total_count: findings.len(),
            findings,
            distinct_categories,
        }
    }

    /// Findings in discovery order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Number of findings
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Categories present at least once
    pub fn distinct_categories(&self) -> &BTreeSet<String> {
        &self.distinct_categories
    }

    /// Check if any PII was found
    pub fn has_pii(&self) -> bool {
        self.total_count > 0
    }

    /// Number of findings per category
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for finding in &self.findings {
            *counts.entry(finding.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Findings of a single category
    pub fn of_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Finding> + 'a {
        self.findings.iter().filter(move |f| f.category == category)
    }

    /// Findings ordered by position in the text
    ///
    /// Sorted by start, then end; ties keep discovery (registry) order.
    pub fn by_position(&self) -> Vec<&Finding> {
        let mut sorted: Vec<&Finding> = self.findings.iter().collect();
        sorted.sort_by_key(|f| (f.start_index, f.end_index));
        sorted
    }

    /// Consume the result, returning the findings
    pub fn into_findings(self) -> Vec<Finding> {
        self.findings
    }
}

impl From<Vec<Finding>> for ScanResult {
    fn from(findings: Vec<Finding>) -> Self {
        Self::new(findings)
    }
}

impl Default for ScanResult {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
