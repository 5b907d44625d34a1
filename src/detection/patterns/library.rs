//! Built-in pattern libraries
//!
//! Each dataset domain ships an embedded TOML library listing its categories in
//! scan order.

use super::PatternRegistry;
use crate::domain::errors::PatternError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dataset domain with a built-in pattern library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// Patient, provider and prescription records
    Medical,
    /// Student, guardian and staff records
    Education,
    /// Retail banking customer records
    Financial,
    /// Law firm case records
    Legal,
    /// Employer prompts about education records
    EducationPrompt,
    /// Employer prompts about legal records
    LegalPrompt,
    /// Case-sensitive presence check for medical prompts
    MedicalVerification,
    /// Case-sensitive presence check for financial prompts
    FinancialVerification,
}

impl Domain {
    /// All built-in domains
    pub const ALL: [Domain; 8] = [
        Domain::Medical,
        Domain::Education,
        Domain::Financial,
        Domain::Legal,
        Domain::EducationPrompt,
        Domain::LegalPrompt,
        Domain::MedicalVerification,
        Domain::FinancialVerification,
    ];

    /// Configuration name of the domain
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Medical => "medical",
            Self::Education => "education",
            Self::Financial => "financial",
            Self::Legal => "legal",
            Self::EducationPrompt => "education_prompt",
            Self::LegalPrompt => "legal_prompt",
            Self::MedicalVerification => "medical_verification",
            Self::FinancialVerification => "financial_verification",
        }
    }

    /// Embedded TOML library for the domain
    pub fn library_source(&self) -> &'static str {
        match self {
            Self::Medical => include_str!("../../../patterns/medical.toml"),
            Self::Education => include_str!("../../../patterns/education.toml"),
            Self::Financial => include_str!("../../../patterns/financial.toml"),
            Self::Legal => include_str!("../../../patterns/legal.toml"),
            Self::EducationPrompt => include_str!("../../../patterns/education_prompt.toml"),
            Self::LegalPrompt => include_str!("../../../patterns/legal_prompt.toml"),
            Self::MedicalVerification => {
                include_str!("../../../patterns/medical_verification.toml")
            }
            Self::FinancialVerification => {
                include_str!("../../../patterns/financial_verification.toml")
            }
        }
    }

    /// Compile the domain's registry
    pub fn registry(&self) -> Result<PatternRegistry, PatternError> {
        let registry = PatternRegistry::from_toml(self.library_source())?;
        tracing::debug!(
            domain = self.as_str(),
            categories = registry.len(),
            "Loaded built-in pattern library"
        );
        Ok(registry)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == normalized)
            .ok_or_else(|| PatternError::UnknownDomain(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Domain::Medical, 18 ; "medical")]
    #[test_case(Domain::Education, 22 ; "education")]
    #[test_case(Domain::Financial, 18 ; "financial")]
    #[test_case(Domain::Legal, 21 ; "legal")]
    #[test_case(Domain::EducationPrompt, 16 ; "education prompt")]
    #[test_case(Domain::LegalPrompt, 15 ; "legal prompt")]
    #[test_case(Domain::MedicalVerification, 6 ; "medical verification")]
    #[test_case(Domain::FinancialVerification, 5 ; "financial verification")]
    fn test_builtin_library_compiles(domain: Domain, categories: usize) {
        let registry = domain.registry().unwrap();
        assert_eq!(registry.len(), categories);
    }

    #[test]
    fn test_shared_category_order() {
        for domain in [Domain::Medical, Domain::Education, Domain::Financial, Domain::Legal] {
            let registry = domain.registry().unwrap();
            let leading: Vec<_> = registry.categories().take(4).collect();
            assert_eq!(leading, vec!["PERSON_NAME", "EMAIL", "PHONE", "SSN"]);
        }
    }

    #[test]
    fn test_verification_libraries_are_case_sensitive() {
        assert!(!Domain::MedicalVerification.registry().unwrap().is_case_insensitive());
        assert!(!Domain::FinancialVerification.registry().unwrap().is_case_insensitive());
        assert!(Domain::Medical.registry().unwrap().is_case_insensitive());
    }

    #[test]
    fn test_medication_vocabulary_is_deduplicated() {
        let registry = Domain::Medical.registry().unwrap();
        let medication = registry.get("MEDICATION_NAME").unwrap();
        assert_eq!(
            medication.kind,
            crate::detection::patterns::RecognizerKind::Vocabulary { terms: 68 }
        );
    }

    #[test]
    fn test_percent_and_bracket_patterns_keep_word_boundaries() {
        let education = Domain::Education.registry().unwrap();
        for category in ["ASSESSMENT_SCORE", "ATTENDANCE_RATE"] {
            let regex = &education.get(category).unwrap().regex;
            assert!(!regex.is_match("Math score: 85% this term"), "{category}");
            assert!(!regex.is_match("Attendance 97%"), "{category}");
        }

        let financial = Domain::Financial.registry().unwrap();
        let income = &financial.get("INCOME_BRACKET").unwrap().regex;
        assert!(!income.is_match("Income: $50k-$75k"));
        assert!(!income.is_match("Income: $150k+ annually"));
        assert_eq!(
            income.find("Bracket: Under $50k").map(|m| m.as_str()),
            Some("Under $50k")
        );

        let credit = &financial.get("CREDIT_SCORE").unwrap().regex;
        assert!(!credit.is_match("Credit: Good (700-749) rating"));
    }

    #[test]
    fn test_domain_from_str() {
        assert_eq!("medical".parse::<Domain>().unwrap(), Domain::Medical);
        assert_eq!("Legal-Prompt".parse::<Domain>().unwrap(), Domain::LegalPrompt);
        assert!(matches!(
            "retail".parse::<Domain>(),
            Err(PatternError::UnknownDomain(_))
        ));
    }

    #[test]
    fn test_domain_display_round_trip() {
        for domain in Domain::ALL {
            assert_eq!(domain.to_string().parse::<Domain>().unwrap(), domain);
        }
    }
}
