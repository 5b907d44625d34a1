//! Prompt labeling
//!
//! Labels prompts for PII presence, checks the label against what the prompt
//! was meant to contain, and extracts the entities the prompt refers to.

use super::models::Finding;
use super::patterns::Domain;
use super::{PiiDetector, PiiScanner};
use crate::domain::result::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Expected against actual PII presence for one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresenceCheck {
    /// Whether actual presence equals the expectation
    pub matches_expectation: bool,
    /// Whether the text was meant to contain PII
    pub expected: bool,
    /// Whether any PII was found
    pub actual: bool,
    /// Findings behind `actual`
    pub pii_findings: Vec<Finding>,
}

/// Check a text's PII presence against an expectation
pub fn verify_pii_presence(detector: &dyn PiiDetector, text: &str, expected: bool) -> PresenceCheck {
    let pii_findings = detector.detect(text);
    let actual = !pii_findings.is_empty();

    PresenceCheck {
        matches_expectation: actual == expected,
        expected,
        actual,
        pii_findings,
    }
}

/// Entity referenced by a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceEntity {
    /// Kind of entity (`person`, `student`, `case`, `contact`)
    pub entity_type: String,
    /// Matched value
    pub entity_value: String,
    /// Role the entity plays in the domain
    pub context: String,
}

/// Maps findings of one category to a source entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRule {
    pub category: &'static str,
    pub entity_type: &'static str,
    pub context: &'static str,
}

const EDUCATION_RULES: &[EntityRule] = &[
    EntityRule {
        category: "PERSON_NAME",
        entity_type: "person",
        context: "educational_participant",
    },
    EntityRule {
        category: "STUDENT_ID",
        entity_type: "student",
        context: "student_record",
    },
    EntityRule {
        category: "EMAIL",
        entity_type: "contact",
        context: "communication",
    },
];

const LEGAL_RULES: &[EntityRule] = &[
    EntityRule {
        category: "PERSON_NAME",
        entity_type: "person",
        context: "legal_participant",
    },
    EntityRule {
        category: "CASE_NUMBER",
        entity_type: "case",
        context: "legal_case",
    },
    EntityRule {
        category: "EMAIL",
        entity_type: "contact",
        context: "communication",
    },
];

/// Entity rules for a domain; empty when the domain defines none
pub fn entity_rules(domain: Domain) -> &'static [EntityRule] {
    match domain {
        Domain::Education | Domain::EducationPrompt => EDUCATION_RULES,
        Domain::Legal | Domain::LegalPrompt => LEGAL_RULES,
        _ => &[],
    }
}

/// Extract source entities, rule by rule, each in finding order
pub fn extract_source_entities(findings: &[Finding], rules: &[EntityRule]) -> Vec<SourceEntity> {
    rules
        .iter()
        .flat_map(|rule| {
            findings
                .iter()
                .filter(move |f| f.category == rule.category)
                .map(move |f| SourceEntity {
                    entity_type: rule.entity_type.to_string(),
                    entity_value: f.value.clone(),
                    context: rule.context.to_string(),
                })
        })
        .collect()
}

/// A prompt labeled for PII
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledPrompt {
    pub prompt_id: Uuid,
    pub prompt: String,
    /// Whether any PII was found
    pub contains_pii: bool,
    /// Whether the prompt was meant to contain PII
    pub intended_pii: bool,
    pub verification_passed: bool,
    pub pii_findings: Vec<Finding>,
    pub pii_count: usize,
    pub unique_pii_types: Vec<String>,
    pub source_entities: Vec<SourceEntity>,
    pub entity_count: usize,
    /// Prompt length in characters
    pub prompt_length: usize,
    pub generated_timestamp: DateTime<Utc>,
}

/// Labels prompts with a domain scanner
///
/// An optional verifier replaces the scanner for the presence check. The
/// medical and financial prompt sets use their case-sensitive verification
/// libraries this way.
pub struct PromptLabeler {
    scanner: PiiScanner,
    verifier: Option<Arc<dyn PiiDetector>>,
    rules: &'static [EntityRule],
}

impl PromptLabeler {
    /// Create a labeler from a scanner and entity rules
    pub fn new(scanner: PiiScanner, rules: &'static [EntityRule]) -> Self {
        Self {
            scanner,
            verifier: None,
            rules,
        }
    }

    /// Create a labeler using a built-in domain library and its entity rules
    pub fn for_domain(domain: Domain) -> Result<Self> {
        let scanner = PiiScanner::new(domain.registry()?)?;
        Ok(Self::new(scanner, entity_rules(domain)))
    }

    /// Use a separate detector for the presence check
    pub fn with_verifier(mut self, verifier: Arc<dyn PiiDetector>) -> Self {
        self.verifier = Some(verifier);
        self
    }

    /// Label one prompt
    pub fn label(&self, prompt: impl Into<String>, intended_pii: bool) -> LabeledPrompt {
        let prompt = prompt.into();
        let result = self.scanner.scan(&prompt);

        let verification_passed = match &self.verifier {
            Some(verifier) => verify_pii_presence(verifier.as_ref(), &prompt, intended_pii),
            None => verify_pii_presence(&self.scanner, &prompt, intended_pii),
        }
        .matches_expectation;

        let source_entities = extract_source_entities(result.findings(), self.rules);
        let unique_pii_types = result.distinct_categories().iter().cloned().collect();

        tracing::debug!(
            pii_count = result.total_count(),
            intended_pii,
            verification_passed,
            "Labeled prompt"
        );

        LabeledPrompt {
            prompt_id: Uuid::new_v4(),
            prompt_length: prompt.chars().count(),
            prompt,
            contains_pii: result.has_pii(),
            intended_pii,
            verification_passed,
            pii_count: result.total_count(),
            unique_pii_types,
            entity_count: source_entities.len(),
            source_entities,
            pii_findings: result.into_findings(),
            generated_timestamp: Utc::now(),
        }
    }
}
