//! Pattern registry for PII detection
//!
//! A [`PatternRegistry`] is an ordered mapping from category name to a compiled
//! [`Recognizer`]. Registry order is scan order. Recognizers are independent: a
//! span claimed by one category is still visible to every other category.

pub mod library;
pub mod vocabulary;

use crate::domain::errors::{PatternError, TaggerError};
use crate::domain::result::Result;
use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::path::Path;

pub use library::Domain;

/// How a recognizer was defined
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognizerKind {
    /// Structural regular expression (SSN format, e-mail shape, ...)
    Pattern,
    /// Whole-word union of a closed vocabulary
    Vocabulary {
        /// Number of distinct values after de-duplication
        terms: usize,
    },
}

/// Compiled recognizer for one PII category
#[derive(Debug, Clone)]
pub struct Recognizer {
    /// Category name
    pub category: String,
    /// Compiled regex
    pub regex: Regex,
    /// Origin of the expression
    pub kind: RecognizerKind,
}

impl Recognizer {
    /// Source expression the regex was compiled from
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

/// Pattern definition from a TOML library
#[derive(Debug, Clone, Deserialize)]
pub struct PatternDefinition {
    /// PII category label
    pub category: String,
    /// Regular expression
    #[serde(default)]
    pub pattern: Option<String>,
    /// Closed set of literal values
    #[serde(default)]
    pub vocabulary: Option<Vec<String>>,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    #[serde(default = "default_case_insensitive")]
    case_insensitive: bool,
    #[serde(default)]
    patterns: Vec<PatternDefinition>,
}

fn default_case_insensitive() -> bool {
    true
}

/// Ordered, named recognizers for one domain
///
/// Built once, then handed to a scanner which never mutates it.
///
/// # Examples
///
/// ```
/// use pii_tagger::detection::patterns::PatternRegistry;
///
/// let mut registry = PatternRegistry::new();
/// registry.register("SSN", r"\b\d{3}-\d{2}-\d{4}\b")?;
/// registry.build_from_vocabulary("MEDICATION_NAME", ["Metformin", "Insulin"])?;
///
/// assert_eq!(registry.categories().collect::<Vec<_>>(), ["SSN", "MEDICATION_NAME"]);
/// # Ok::<(), pii_tagger::domain::PatternError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    recognizers: Vec<Recognizer>,
    case_insensitive: bool,
}

impl PatternRegistry {
    /// Create an empty registry with case-insensitive matching
    pub fn new() -> Self {
        Self {
            recognizers: Vec::new(),
            case_insensitive: true,
        }
    }

    /// Create an empty registry whose recognizers respect case
    pub fn case_sensitive() -> Self {
        Self {
            recognizers: Vec::new(),
            case_insensitive: false,
        }
    }

    /// Whether recognizers are compiled case-insensitively
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Register a regular expression under `category`
    ///
    /// Overwrites an existing recognizer of the same category in place, so the
    /// category keeps its original scan position.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidPattern`] if the expression does not
    /// compile and [`PatternError::EmptyCategory`] for a blank category name.
    pub fn register(
        &mut self,
        category: impl Into<String>,
        pattern: &str,
    ) -> std::result::Result<(), PatternError> {
        let category = Self::checked_category(category.into())?;
        let regex = self.compile(&category, pattern)?;
        self.insert(Recognizer {
            category,
            regex,
            kind: RecognizerKind::Pattern,
        });
        Ok(())
    }

    /// Register a whole-word recognizer for a closed set of values
    ///
    /// Values are escaped and de-duplicated before being composed.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::EmptyVocabulary`] when `values` holds no
    /// non-blank entry.
    pub fn build_from_vocabulary<I, S>(
        &mut self,
        category: impl Into<String>,
        values: I,
    ) -> std::result::Result<(), PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let category = Self::checked_category(category.into())?;
        let vocabulary = vocabulary::vocabulary_pattern(values, self.case_insensitive)
            .ok_or_else(|| PatternError::EmptyVocabulary(category.clone()))?;
        let regex = self.compile(&category, &vocabulary.pattern)?;

        self.insert(Recognizer {
            category,
            regex,
            kind: RecognizerKind::Vocabulary {
                terms: vocabulary.terms,
            },
        });
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with_pattern(
        mut self,
        category: impl Into<String>,
        pattern: &str,
    ) -> std::result::Result<Self, PatternError> {
        self.register(category, pattern)?;
        Ok(self)
    }

    /// Builder-style [`build_from_vocabulary`](Self::build_from_vocabulary)
    pub fn with_vocabulary<I, S>(
        mut self,
        category: impl Into<String>,
        values: I,
    ) -> std::result::Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.build_from_vocabulary(category, values)?;
        Ok(self)
    }

    /// Create a registry from a TOML pattern library file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            TaggerError::Configuration(format!(
                "Failed to read pattern library {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_toml(&content)?)
    }

    /// Create a registry from TOML content
    ///
    /// The library is an ordered `[[patterns]]` array; each entry has a
    /// `category` and exactly one of `pattern` or `vocabulary`.
    pub fn from_toml(content: &str) -> std::result::Result<Self, PatternError> {
        Self::from_toml_with_case(content, None)
    }

    /// Create a registry from TOML content, optionally forcing case handling
    ///
    /// `Some(flag)` replaces the library's own `case_insensitive` setting.
    pub fn from_toml_with_case(
        content: &str,
        case_insensitive: Option<bool>,
    ) -> std::result::Result<Self, PatternError> {
        let library: PatternLibrary = toml::from_str(content)
            .map_err(|e| PatternError::Library(format!("Failed to parse TOML: {e}")))?;

        let mut registry = if case_insensitive.unwrap_or(library.case_insensitive) {
            Self::new()
        } else {
            Self::case_sensitive()
        };

        for def in library.patterns {
            match (def.pattern, def.vocabulary) {
                (Some(pattern), None) => registry.register(def.category, &pattern)?,
                (None, Some(values)) => registry.build_from_vocabulary(def.category, values)?,
                _ => {
                    return Err(PatternError::Library(format!(
                        "Category '{}' must define exactly one of 'pattern' or 'vocabulary'",
                        def.category
                    )))
                }
            }
        }

        Ok(registry)
    }

    /// Get all recognizers in scan order
    pub fn recognizers(&self) -> &[Recognizer] {
        &self.recognizers
    }

    /// Category names in scan order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.recognizers.iter().map(|r| r.category.as_str())
    }

    /// Get the recognizer for a category
    pub fn get(&self, category: &str) -> Option<&Recognizer> {
        self.recognizers.iter().find(|r| r.category == category)
    }

    /// Check whether a category is registered
    pub fn contains(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    /// Number of registered categories
    pub fn len(&self) -> usize {
        self.recognizers.len()
    }

    /// Check whether the registry has no categories
    pub fn is_empty(&self) -> bool {
        self.recognizers.is_empty()
    }

    fn checked_category(category: String) -> std::result::Result<String, PatternError> {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            return Err(PatternError::EmptyCategory);
        }
        Ok(trimmed.to_string())
    }

    fn compile(&self, category: &str, pattern: &str) -> std::result::Result<Regex, PatternError> {
        RegexBuilder::new(pattern)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|e| PatternError::InvalidPattern {
                category: category.to_string(),
                message: e.to_string(),
            })
    }

    fn insert(&mut self, recognizer: Recognizer) {
        match self
            .recognizers
            .iter_mut()
            .find(|r| r.category == recognizer.category)
        {
            Some(existing) => {
                tracing::debug!(category = %recognizer.category, "Overwriting recognizer");
                *existing = recognizer;
            }
            None => self.recognizers.push(recognizer),
        }
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}
