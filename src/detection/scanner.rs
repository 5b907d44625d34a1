//! Regex-based PII scanner

use super::models::{Finding, ScanResult};
use super::patterns::{PatternRegistry, Recognizer};
use super::PiiDetector;
use crate::domain::errors::PatternError;
use rayon::prelude::*;
use std::sync::Arc;

/// Scans text against every recognizer of a registry
///
/// Each category is matched independently over the whole text. Within one
/// category matches never overlap; across categories they may, and every one
/// of them is reported.
///
/// The registry is shared behind an [`Arc`], so a scanner is cheap to clone
/// and safe to use from many threads at once.
#[derive(Debug, Clone)]
pub struct PiiScanner {
    registry: Arc<PatternRegistry>,
}

impl PiiScanner {
    /// Create a scanner over a registry
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyRegistry`] if the registry has no
    /// categories.
    pub fn new(registry: PatternRegistry) -> Result<Self, PatternError> {
        Self::from_shared(Arc::new(registry))
    }

    /// Create a scanner over an already shared registry
    pub fn from_shared(registry: Arc<PatternRegistry>) -> Result<Self, PatternError> {
        if registry.is_empty() {
            return Err(PatternError::EmptyRegistry);
        }
        Ok(Self { registry })
    }

    /// Registry used for scanning
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Scan text, returning findings in registry order
    pub fn scan(&self, text: &str) -> ScanResult {
        ScanResult::new(self.find_all(text))
    }

    /// Scan text, returning findings ordered by position
    ///
    /// Findings sharing a span keep registry order.
    pub fn scan_sorted(&self, text: &str) -> ScanResult {
        let mut findings = self.find_all(text);
        findings.sort_by_key(|f| (f.start_index, f.end_index));
        ScanResult::new(findings)
    }

    /// Check whether any category matches, stopping at the first hit
    pub fn contains_pii(&self, text: &str) -> bool {
        self.registry
            .recognizers()
            .iter()
            .any(|r| r.regex.find_iter(text).any(|m| !m.is_empty()))
    }

    /// Scan many texts in parallel
    ///
    /// Results are returned in input order.
    pub fn scan_batch<S>(&self, texts: &[S]) -> Vec<ScanResult>
    where
        S: AsRef<str> + Sync,
    {
        texts.par_iter().map(|t| self.scan(t.as_ref())).collect()
    }

    fn find_all(&self, text: &str) -> Vec<Finding> {
        let mut findings = Vec::new();
        for recognizer in self.registry.recognizers() {
            collect_matches(recognizer, text, &mut findings);
        }
        findings
    }
}

/// Append all matches of one recognizer with character offsets
///
/// Zero-length matches carry no value and are dropped.
fn collect_matches(recognizer: &Recognizer, text: &str, findings: &mut Vec<Finding>) {
    let mut cursor = CharCursor::default();

    for matched in recognizer.regex.find_iter(text).filter(|m| !m.is_empty()) {
        let start = cursor.advance_to(text, matched.start());
        let end = cursor.advance_to(text, matched.end());
        findings.push(Finding::new(
            recognizer.category.as_str(),
            matched.as_str(),
            start,
            end,
        ));
    }
}

/// Converts increasing byte offsets into character offsets
///
/// Matches from one recognizer arrive left to right, so each conversion only
/// counts the characters since the previous one.
#[derive(Debug, Default)]
struct CharCursor {
    byte: usize,
    chars: usize,
}

impl CharCursor {
    fn advance_to(&mut self, text: &str, byte: usize) -> usize {
        if let Some(segment) = text.get(self.byte..byte) {
            self.chars += segment.chars().count();
            self.byte = byte;
        }
        self.chars
    }
}

impl PiiDetector for PiiScanner {
    fn detect(&self, text: &str) -> Vec<Finding> {
        self.find_all(text)
    }

    fn contains_pii(&self, text: &str) -> bool {
        PiiScanner::contains_pii(self, text)
    }

    fn categories(&self) -> Vec<String> {
        self.registry.categories().map(str::to_string).collect()
    }
}
