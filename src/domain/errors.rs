//! Domain error types
//!
//! This module defines the error hierarchy for the tagger. Pattern problems are
//! surfaced while a registry is being built, never while text is scanned.

use thiserror::Error;

/// Main tagger error type
///
/// This is the primary error type used throughout the library.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum TaggerError {
    /// Configuration file or value errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Pattern registry construction errors
    #[error("Pattern configuration error: {0}")]
    Pattern(#[from] PatternError),

    /// Template rendering errors
    #[error("Template error: {0}")]
    Template(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Pattern registry errors
///
/// Raised when a recognizer cannot be built. A registry that was built
/// successfully can always be scanned.
#[derive(Debug, Error)]
pub enum PatternError {
    /// Regular expression failed to compile
    #[error("Invalid pattern for category '{category}': {message}")]
    InvalidPattern { category: String, message: String },

    /// Vocabulary contained no usable values
    #[error("Vocabulary for category '{0}' is empty")]
    EmptyVocabulary(String),

    /// Category name was empty
    #[error("Category name must not be empty")]
    EmptyCategory,

    /// Registry has no categories to scan with
    #[error("Pattern registry has no categories")]
    EmptyRegistry,

    /// Requested built-in domain does not exist
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    /// Pattern library could not be parsed
    #[error("Invalid pattern library: {0}")]
    Library(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for TaggerError {
    fn from(err: std::io::Error) -> Self {
        TaggerError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for TaggerError {
    fn from(err: serde_json::Error) -> Self {
        TaggerError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for TaggerError {
    fn from(err: toml::de::Error) -> Self {
        TaggerError::Configuration(format!("TOML parse error: {err}"))
    }
}
