//! Row Search
//!
//! Substring matching over a per-row haystack built from every field value.
//! This is plain containment, not tokenized or fuzzy search.

use serde_json::Value;

use super::record::Record;

/// Lowercase text fragment contributed by one field value
///
/// String values that themselves parse as JSON contribute the parsed form's
/// JSON text, so a row carrying an embedded JSON payload is searchable by
/// its inner fields. Null contributes nothing.
pub fn value_fragment(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => match serde_json::from_str::<Value>(s) {
            Ok(parsed) => parsed.to_string().to_lowercase(),
            Err(_) => s.to_lowercase(),
        },
        other => other.to_string().to_lowercase(),
    }
}

/// Space-joined lowercase haystack for a whole row
pub fn row_haystack<R: Record>(row: &R) -> String {
    row.values()
        .iter()
        .map(|v| value_fragment(v))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Check a row against a normalized (trimmed, lowercased) search term
///
/// An empty term matches everything.
pub fn matches<R: Record>(row: &R, normalized_term: &str) -> bool {
    if normalized_term.is_empty() {
        return true;
    }
    row_haystack(row).contains(normalized_term)
}
