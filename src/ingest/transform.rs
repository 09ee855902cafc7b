use chrono::Utc;
use serde_json::Value;
use tracing::info;

use super::sanitize::sanitize;

/// Field of the raw payload that carries the record sequence.
pub const VULNERABILITIES_FIELD: &str = "vulnerabilities";

/// Field added to each record at transform time.
pub const INGESTED_AT_FIELD: &str = "ingested_at";

/// Extracts the vulnerability records from a raw payload and prepares
/// them for insertion.
///
/// The payload is expected to be a mapping with an array under
/// `vulnerabilities`; anything else (missing field, wrong type, non-mapping
/// payload) yields an empty batch rather than an error. Each record is
/// key-sanitized and stamped with an `ingested_at` RFC 3339 UTC timestamp,
/// captured once per record. An existing `ingested_at` field is overwritten.
pub fn transform(raw: Value) -> Vec<Value> {
    info!("Transforming data...");

    let records = match raw {
        Value::Object(mut map) => match map.remove(VULNERABILITIES_FIELD) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    };

    records
        .into_iter()
        .map(|record| {
            let mut doc = sanitize(record);
            if let Value::Object(ref mut map) = doc {
                map.insert(
                    INGESTED_AT_FIELD.to_string(),
                    Value::String(Utc::now().to_rfc3339()),
                );
            }
            doc
        })
        .collect()
}
