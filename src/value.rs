//! Literal payloads carried by source literals and target constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value as produced by the pipeline.
///
/// The value is independent of the declared type of the literal that holds
/// it; a `Literal(Integer(5), long)` and a `Literal(Integer(5), integer)` are
/// both valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    String(String),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Render the value the way it appears as constant text in markup.
    ///
    /// Returns `None` for `Null`.
    pub fn to_markup_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Boolean(b) => Some(b.to_string()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Double(d) => Some(format_double(*d)),
            Value::String(s) => Some(s.clone()),
        }
    }
}

fn format_double(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        let text = if d > 0.0 { "INF" } else { "-INF" };
        text.to_string()
    } else if d.fract() == 0.0 && d.abs() < 1e15 {
        format!("{:.1}", d)
    } else {
        d.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "{}", s),
            other => match other.to_markup_text() {
                Some(text) => write!(f, "{}", text),
                None => Ok(()),
            },
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup_text() {
        assert_eq!(Value::Null.to_markup_text(), None);
        assert_eq!(Value::Boolean(true).to_markup_text().as_deref(), Some("true"));
        assert_eq!(Value::Integer(-7).to_markup_text().as_deref(), Some("-7"));
        assert_eq!(Value::Double(2.0).to_markup_text().as_deref(), Some("2.0"));
        assert_eq!(Value::Double(0.25).to_markup_text().as_deref(), Some("0.25"));
        assert_eq!(
            Value::Double(f64::NEG_INFINITY).to_markup_text().as_deref(),
            Some("-INF")
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::from(5), Value::Integer(5));
        assert_eq!(Value::from(5i64), Value::Integer(5));
        assert_eq!(Value::from(1.5), Value::Double(1.5));
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(false), Value::Boolean(false));
        assert!(Value::Null.is_null());
    }
}
