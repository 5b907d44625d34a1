//! PII detection module
//!
//! Scans rendered records against an ordered [`PatternRegistry`](patterns::PatternRegistry)
//! and turns the matches into findings, per-record summaries and corpus
//! statistics.

pub mod aggregate;
pub mod engine;
pub mod labeling;
pub mod models;
pub mod patterns;
pub mod report;
pub mod scanner;
pub mod template;

use models::{Finding, ScanResult};

pub use aggregate::{CorpusSummary, FindingAggregator};
pub use engine::TaggingEngine;
pub use scanner::PiiScanner;

/// Trait for PII detection implementations
pub trait PiiDetector: Send + Sync {
    /// Find every match of every category, grouped by category in scan order
    fn detect(&self, text: &str) -> Vec<Finding>;

    /// Check whether any category matches at all
    fn contains_pii(&self, text: &str) -> bool;

    /// Categories this detector reports, in scan order
    fn categories(&self) -> Vec<String>;

    /// Detect and summarize in one step
    fn scan(&self, text: &str) -> ScanResult {
        ScanResult::new(self.detect(text))
    }
}
