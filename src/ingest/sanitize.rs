use serde_json::Value;

/// Rewrites a single mapping key to satisfy MongoDB field-name rules.
///
/// MongoDB reserves `.` (path separator) and `$` (operator prefix) in
/// field names; both are replaced with `_`.
fn sanitize_key(key: &str) -> String {
    key.replace(['.', '$'], "_")
}

/// Recursively sanitizes mapping keys in an arbitrary JSON value.
///
/// - Mappings: every key is rewritten with [`sanitize_key`] and every value
///   sanitized recursively. Collisions after rewriting are not detected;
///   the last key wins.
/// - Sequences: each element is sanitized recursively, order preserved.
/// - Scalars: returned unchanged.
pub fn sanitize(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (sanitize_key(&key), sanitize(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(sanitize).collect()),
        scalar => scalar,
    }
}
