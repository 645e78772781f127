//! Scalar coercion from raw cell text
//!
//! Every cell in the input is text. Coercion turns a cell into a typed
//! scalar without ever failing: anything that does not parse as a number
//! is a string.

use std::fmt;

/// A typed value coerced from raw cell text
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Int(i64),
    Float(f64),
    Str(String),
}

impl Scalar {
    /// Coerces raw cell text into a typed scalar.
    ///
    /// Numeric parsing tries float first so `"3"` and `"3.0"` coerce the
    /// same way; a float with zero fractional part narrows to `Int`.
    /// Scientific notation is accepted as float. The string fallback
    /// trims whitespace and strips one layer of enclosing quotes.
    pub fn coerce(raw: &str) -> Scalar {
        let trimmed = raw.trim();
        if let Ok(value) = trimmed.parse::<f64>() {
            return Self::narrow(value);
        }
        if let Ok(value) = trimmed.parse::<i64>() {
            return Scalar::Int(value);
        }
        Scalar::Str(strip_quotes(trimmed).to_string())
    }

    /// Narrows a float to `Int` when it is finite, has zero fractional
    /// part, and fits the i64 range; otherwise keeps it as `Float`.
    pub fn narrow(value: f64) -> Scalar {
        if value.is_finite()
            && value.fract() == 0.0
            && value >= i64::MIN as f64
            && value <= i64::MAX as f64
        {
            Scalar::Int(value as i64)
        } else {
            Scalar::Float(value)
        }
    }

    /// Returns the numeric value, if this scalar is numeric
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Int(i) => Some(*i as f64),
            Scalar::Float(f) => Some(*f),
            Scalar::Str(_) => None,
        }
    }

    /// Returns true for the string variant
    pub fn is_str(&self) -> bool {
        matches!(self, Scalar::Str(_))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Str(s) => write!(f, "{}", s),
        }
    }
}

/// Strips one layer of matching enclosing single or double quotes
fn strip_quotes(s: &str) -> &str {
    let bytes = s.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}
