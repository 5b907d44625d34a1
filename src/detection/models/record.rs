//! Tagged record model

use super::finding::{Finding, ScanResult};
use crate::detection::patterns::Domain;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A rendered record together with the PII found in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedRecord {
    /// Record identifier
    pub id: String,

    /// Domain whose library tagged the record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<Domain>,

    /// Structured fields the text was rendered from
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, String>,

    /// Rendered text that was scanned
    #[serde(rename = "full_record_text")]
    pub text: String,

    /// Findings in scan order
    pub pii_findings: Vec<Finding>,

    /// Number of findings
    pub pii_count: usize,

    /// Distinct categories, sorted
    pub unique_pii_types: Vec<String>,

    /// Text length in characters
    pub text_length: usize,

    /// When the record was tagged
    pub generated_at: DateTime<Utc>,
}

impl TaggedRecord {
    /// Attach a scan result to a rendered record
    pub fn new(id: impl Into<String>, text: impl Into<String>, result: ScanResult) -> Self {
        let text = text.into();
        let unique_pii_types = result.distinct_categories().iter().cloned().collect();

        Self {
            id: id.into(),
            domain: None,
            fields: BTreeMap::new(),
            text_length: text.chars().count(),
            text,
            pii_count: result.total_count(),
            unique_pii_types,
            pii_findings: result.into_findings(),
            generated_at: Utc::now(),
        }
    }

    /// Attach the structured fields the text was rendered from
    pub fn with_fields(mut self, fields: BTreeMap<String, String>) -> Self {
        self.fields = fields;
        self
    }

    /// Record the domain that tagged the text
    pub fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Rebuild the scan result from the stored findings
    ///
    /// Summary values are derived again, so a record read from disk cannot
    /// report counts that disagree with its findings.
    pub fn scan_result(&self) -> ScanResult {
        ScanResult::new(self.pii_findings.clone())
    }

    /// Check whether any PII was found
    pub fn has_pii(&self) -> bool {
        !self.pii_findings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TaggedRecord {
        let text = "Patient SSN 123-45-6789";
        let result = ScanResult::new(vec![Finding::new("SSN", "123-45-6789", 12, 23)]);
        TaggedRecord::new("MED-000001", text, result)
    }

    #[test]
    fn test_record_summary_fields() {
        let record = sample();
        assert_eq!(record.pii_count, 1);
        assert_eq!(record.unique_pii_types, vec!["SSN"]);
        assert_eq!(record.text_length, 23);
        assert!(record.has_pii());
    }

    #[test]
    fn test_record_json_shape() {
        let record = sample();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["full_record_text"], "Patient SSN 123-45-6789");
        assert_eq!(json["pii_findings"][0]["pii_type"], "SSN");
        assert!(json.get("fields").is_none());
        assert!(json.get("domain").is_none());

        let parsed: TaggedRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.scan_result().total_count(), 1);
    }

    #[test]
    fn test_record_domain_round_trip() {
        let record = sample().with_domain(Domain::LegalPrompt);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["domain"], "legal_prompt");

        let parsed: TaggedRecord = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.domain, Some(Domain::LegalPrompt));
    }
}
