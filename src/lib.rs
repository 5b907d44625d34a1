// PII Tagger - PII detection and indexing for synthetic text datasets
// Copyright (c) 2025 PII Tagger Contributors
// Licensed under the MIT License

//! # PII Tagger
//!
//! Finds personally identifiable information in rendered text records with
//! named regular-expression recognizers, records the category, value and
//! character span of every match, and aggregates the findings per record and
//! per corpus.
//!
//! ## Architecture
//!
//! - [`detection`] - Pattern registry, scanner, aggregation, labeling, reports
//! - [`domain`] - Error types
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//! - [`cli`] - Command-line interface
//!
//! ## Quick Start
//!
//! ```rust
//! use pii_tagger::detection::patterns::PatternRegistry;
//! use pii_tagger::detection::{FindingAggregator, PiiScanner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let registry = PatternRegistry::new()
//!     .with_pattern("EMAIL", r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")?
//!     .with_pattern("SSN", r"\b\d{3}-\d{2}-\d{4}\b")?
//!     .with_vocabulary("MEDICATION_NAME", ["Metformin", "Insulin"])?;
//! let scanner = PiiScanner::new(registry)?;
//!
//! let text = "Patient takes Metformin, SSN 123-45-6789";
//! let result = scanner.scan(text);
//! for finding in result.findings() {
//!     assert_eq!(finding.slice(text), Some(finding.value.as_str()));
//! }
//!
//! let corpus = FindingAggregator::corpus_summary([&result]);
//! assert_eq!(corpus.total_findings, 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Built-in Domains
//!
//! Each [`Domain`](detection::patterns::Domain) ships an embedded pattern
//! library:
//!
//! ```rust
//! use pii_tagger::detection::patterns::Domain;
//!
//! let registry = Domain::Legal.registry()?;
//! assert!(registry.contains("CASE_NUMBER"));
//! # Ok::<(), pii_tagger::domain::PatternError>(())
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod domain;
pub mod logging;
