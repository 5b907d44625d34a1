//! Domain error and result types.
//!
//! # Error Handling
//!
//! All fallible library operations return [`Result<T>`], an alias over
//! [`TaggerError`]. Pattern problems are raised as [`PatternError`] and convert
//! into [`TaggerError::Pattern`] with the `?` operator:
//!
//! ```rust
//! use pii_tagger::detection::patterns::PatternRegistry;
//! use pii_tagger::domain::Result;
//!
//! fn example() -> Result<()> {
//!     let mut registry = PatternRegistry::new();
//!     registry.register("SSN", r"\b\d{3}-\d{2}-\d{4}\b")?;
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod errors;
pub mod result;

pub use errors::{PatternError, TaggerError};
pub use result::Result;
