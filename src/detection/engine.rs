//! Tagging engine
//!
//! This module provides the [`TaggingEngine`] that turns rendered records into
//! [`TaggedRecord`]s for one configured domain.
//!
//! # Examples
//!
//! ```
//! use pii_tagger::config::ScannerConfig;
//! use pii_tagger::detection::TaggingEngine;
//!
//! let engine = TaggingEngine::new(&ScannerConfig::default())?;
//! let record = engine.tag("MED-000001", "Patient SSN: 123-45-6789");
//!
//! assert!(record.unique_pii_types.contains(&"SSN".to_string()));
//! # Ok::<(), pii_tagger::domain::TaggerError>(())
//! ```

use super::models::{ScanResult, TaggedRecord};
use super::patterns::{Domain, PatternRegistry};
use super::scanner::PiiScanner;
use super::template::render_with_fallback;
use crate::config::{ScanOrder, ScannerConfig};
use crate::domain::errors::TaggerError;
use crate::domain::result::Result;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;

/// Scans and tags records for one domain
///
/// # Thread Safety
///
/// The engine only reads its registry, so `&TaggingEngine` can be shared
/// across threads; batches are tagged with rayon when `parallel` is set.
#[derive(Debug, Clone)]
pub struct TaggingEngine {
    scanner: PiiScanner,
    domain: Domain,
    order: ScanOrder,
    parallel: bool,
}

impl TaggingEngine {
    /// Create an engine from scanner configuration
    ///
    /// Uses `pattern_library` when set, otherwise the built-in library of
    /// `domain`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The pattern library file cannot be read
    /// - A pattern fails to compile
    /// - The library defines no categories
    pub fn new(config: &ScannerConfig) -> Result<Self> {
        let registry = match config.pattern_library {
            Some(ref path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    TaggerError::Configuration(format!(
                        "Failed to read pattern library {}: {}",
                        path.display(),
                        e
                    ))
                })?;
                PatternRegistry::from_toml_with_case(&content, config.case_insensitive)?
            }
            None => PatternRegistry::from_toml_with_case(
                config.domain.library_source(),
                config.case_insensitive,
            )?,
        };

        tracing::info!(
            domain = %config.domain,
            categories = registry.len(),
            case_insensitive = registry.is_case_insensitive(),
            custom_library = config.pattern_library.is_some(),
            "Tagging engine initialized"
        );

        Ok(Self {
            scanner: PiiScanner::new(registry)?,
            domain: config.domain,
            order: config.order,
            parallel: config.parallel,
        })
    }

    /// Create an engine around an existing scanner
    pub fn with_scanner(scanner: PiiScanner, domain: Domain) -> Self {
        Self {
            scanner,
            domain,
            order: ScanOrder::Registry,
            parallel: true,
        }
    }

    /// Set the finding order
    pub fn with_order(mut self, order: ScanOrder) -> Self {
        self.order = order;
        self
    }

    /// Scanner used by the engine
    pub fn scanner(&self) -> &PiiScanner {
        &self.scanner
    }

    /// Domain the engine tags for
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// Scan text in the configured order
    pub fn scan(&self, text: &str) -> ScanResult {
        match self.order {
            ScanOrder::Registry => self.scanner.scan(text),
            ScanOrder::Position => self.scanner.scan_sorted(text),
        }
    }

    /// Tag one rendered record
    pub fn tag(&self, id: impl Into<String>, text: impl Into<String>) -> TaggedRecord {
        let id = id.into();
        let text = text.into();
        let result = self.scan(&text);

        tracing::debug!(
            record_id = %id,
            findings = result.total_count(),
            categories = result.distinct_categories().len(),
            "Record scanned"
        );

        TaggedRecord::new(id, text, result).with_domain(self.domain)
    }

    /// Render a record from its fields and tag the rendered text
    ///
    /// A single missing field is filled with the placeholder value.
    pub fn tag_fields(
        &self,
        id: impl Into<String>,
        template: &str,
        fields: BTreeMap<String, String>,
    ) -> Result<TaggedRecord> {
        let text = render_with_fallback(template, &fields)?;
        Ok(self.tag(id, text).with_fields(fields))
    }

    /// Tag many `(id, text)` records, preserving input order
    pub fn tag_batch(&self, records: &[(String, String)]) -> Vec<TaggedRecord> {
        let start = Instant::now();

        let tagged: Vec<TaggedRecord> = if self.parallel {
            records
                .par_iter()
                .map(|(id, text)| self.tag(id.as_str(), text.as_str()))
                .collect()
        } else {
            records
                .iter()
                .map(|(id, text)| self.tag(id.as_str(), text.as_str()))
                .collect()
        };

        let findings: usize = tagged.iter().map(|r| r.pii_count).sum();
        crate::log_scan_complete!(tagged.len(), findings, start.elapsed());

        tagged
    }
}
