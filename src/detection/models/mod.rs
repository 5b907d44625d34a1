//! Detection data models

pub mod finding;
pub mod record;

pub use finding::{Finding, ScanResult};
pub use record::TaggedRecord;
