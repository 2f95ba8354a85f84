use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell as stored in a testcase or shown in the view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Empty text, zero, NaN and `false` count as "not there"
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Integer(i) => *i != 0,
            CellValue::Float(f) => *f != 0.0 && !f.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Bool(b) => write!(f, "{}", b),
            CellValue::Integer(i) => write!(f, "{}", i),
            // 100.0 prints as "100"
            CellValue::Float(x) if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 => {
                write!(f, "{}", *x as i64)
            }
            CellValue::Float(x) => write!(f, "{}", x),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<f64> for CellValue {
    fn from(x: f64) -> Self {
        CellValue::Float(x)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_follows_presence_rules() {
        assert!(!CellValue::text("").is_truthy());
        assert!(CellValue::text("x").is_truthy());
        assert!(!CellValue::Integer(0).is_truthy());
        assert!(CellValue::Integer(294000).is_truthy());
        assert!(!CellValue::Float(f64::NAN).is_truthy());
        assert!(!CellValue::Bool(false).is_truthy());
    }

    #[test]
    fn integral_floats_display_without_fraction() {
        assert_eq!(CellValue::Float(100.0).to_string(), "100");
        assert_eq!(CellValue::Float(99.5).to_string(), "99.5");
        assert_eq!(CellValue::Integer(42).to_string(), "42");
    }

    #[test]
    fn untagged_deserialize_picks_natural_variant() {
        let values: Vec<CellValue> = serde_json::from_str(r#"["x", 2, 1.5, true]"#).unwrap();
        assert_eq!(values, vec![
            CellValue::text("x"),
            CellValue::Integer(2),
            CellValue::Float(1.5),
            CellValue::Bool(true),
        ]);
    }
}
