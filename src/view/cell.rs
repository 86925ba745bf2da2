//! Cell Values
//!
//! The typed display value a table cell resolves to once a renderer has run.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A resolved cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Text value
    Text(String),
    /// Numeric value
    Number(f64),
    /// Boolean value
    Bool(bool),
    /// Empty cell
    Empty,
}

impl CellValue {
    /// Resolve a raw row field into a cell value
    ///
    /// Strings and scalars map to their typed variant; nested arrays and
    /// objects fall back to their JSON text form.
    pub fn from_field(value: &Value) -> Self {
        match value {
            Value::Null => Self::Empty,
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Empty),
            Value::String(s) => Self::Text(s.clone()),
            other => Self::Text(other.to_string()),
        }
    }

    /// Resolve an optional row field, treating a missing field as empty
    pub fn from_field_opt(value: Option<&Value>) -> Self {
        value.map(Self::from_field).unwrap_or(Self::Empty)
    }

    /// Get display text for the cell
    pub fn display(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::Number(n) => format!("{n}"),
            Self::Bool(b) => if *b { "Yes" } else { "No" }.to_string(),
            Self::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_field_scalars() {
        assert_eq!(CellValue::from_field(&json!("abc")), CellValue::Text("abc".into()));
        assert_eq!(CellValue::from_field(&json!(4.5)), CellValue::Number(4.5));
        assert_eq!(CellValue::from_field(&json!(true)), CellValue::Bool(true));
        assert_eq!(CellValue::from_field(&json!(null)), CellValue::Empty);
    }

    #[test]
    fn test_from_field_nested() {
        let cell = CellValue::from_field(&json!({"a": 1}));
        assert_eq!(cell, CellValue::Text("{\"a\":1}".into()));
    }

    #[test]
    fn test_missing_field_is_empty() {
        assert_eq!(CellValue::from_field_opt(None), CellValue::Empty);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Text("x".into()).display(), "x");
        assert_eq!(CellValue::Number(3.0).display(), "3");
        assert_eq!(CellValue::Bool(false).display(), "No");
        assert_eq!(CellValue::Empty.display(), "");
    }
}
