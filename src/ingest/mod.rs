//! Domain logic for the ETL pipeline: key sanitization and record
//! transformation. Pure functions over `serde_json::Value`, no I/O.

pub mod sanitize;
pub mod transform;

pub use sanitize::sanitize;
pub use transform::{transform, INGESTED_AT_FIELD, VULNERABILITIES_FIELD};
