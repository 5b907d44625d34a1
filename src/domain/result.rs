//! Result type alias for the tagger
//!
//! This module provides a convenient Result type alias that uses TaggerError
//! as the error type.

use super::errors::TaggerError;

/// Result type alias for tagger operations
///
/// # Examples
///
/// ```
/// use pii_tagger::domain::result::Result;
/// use pii_tagger::domain::errors::TaggerError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(TaggerError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, TaggerError>;
