//! Input types for edaplot specifications
//!
//! This module defines types that model user input: aesthetic mappings,
//! values, and parameters. These are the building blocks used by [`Layer`]
//! and [`Plot`] to capture what a plot helper requested.
//!
//! [`Layer`]: crate::plot::Layer
//! [`Plot`]: crate::plot::Plot

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// Mapping Types
// =============================================================================

/// Aesthetic mapping specification for a layer.
///
/// Maps aesthetic channel names ("x", "y", ...) to columns or literal values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Mappings {
    /// Explicit aesthetic mappings (aesthetic → value)
    pub aesthetics: HashMap<String, AestheticValue>,
}

impl Mappings {
    /// Create a new empty Mappings
    pub fn new() -> Self {
        Self {
            aesthetics: HashMap::new(),
        }
    }

    /// Check if the mappings are empty
    pub fn is_empty(&self) -> bool {
        self.aesthetics.is_empty()
    }

    /// Insert an aesthetic mapping
    pub fn insert(&mut self, aesthetic: impl Into<String>, value: AestheticValue) {
        self.aesthetics.insert(aesthetic.into(), value);
    }

    /// Get an aesthetic value by name
    pub fn get(&self, aesthetic: &str) -> Option<&AestheticValue> {
        self.aesthetics.get(aesthetic)
    }

    /// Check if an aesthetic is mapped
    pub fn contains_key(&self, aesthetic: &str) -> bool {
        self.aesthetics.contains_key(aesthetic)
    }

    /// Get the number of explicit aesthetic mappings
    pub fn len(&self) -> usize {
        self.aesthetics.len()
    }
}

// =============================================================================
// Value Types (used in mappings/settings)
// =============================================================================

/// Value for aesthetic mappings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AestheticValue {
    /// Column reference
    Column(String),
    /// Literal value (string, number, or boolean)
    Literal(LiteralValue),
}

impl AestheticValue {
    /// Create a column mapping
    pub fn column(name: impl Into<String>) -> Self {
        Self::Column(name.into())
    }

    /// Get column name if this is a column mapping
    pub fn column_name(&self) -> Option<&str> {
        match self {
            Self::Column(name) => Some(name),
            _ => None,
        }
    }

    /// Check if this is a literal value (not a column mapping)
    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }
}

impl std::fmt::Display for AestheticValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AestheticValue::Column(name) => write!(f, "{}", name),
            AestheticValue::Literal(lit) => write!(f, "{}", lit),
        }
    }
}

/// Scalar values usable in aesthetic mappings and value comparisons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

impl LiteralValue {
    /// Convert to an unquoted string form, suitable for deriving column
    /// names and map keys. Whole numbers render without a trailing `.0`.
    pub fn to_key_string(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Boolean(b) => b.to_string(),
        }
    }

    /// Name of the variant, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
        }
    }
}

impl std::fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::String(s) => write!(f, "'{}'", s),
            LiteralValue::Number(n) => write!(f, "{}", format_number(*n)),
            LiteralValue::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for LiteralValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<f64> for LiteralValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i64> for LiteralValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for LiteralValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for LiteralValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Value for geom parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterValue {
    String(String),
    Number(f64),
    Boolean(bool),
    /// Null value to explicitly opt out of a setting
    Null,
}

/// Format number for display (remove trailing zeros for integers)
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        n.to_string()
    }
}

impl ParameterValue {
    /// Convert to a serde_json::Value
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ParameterValue::String(s) => serde_json::Value::String(s.clone()),
            ParameterValue::Number(n) => serde_json::json!(n),
            ParameterValue::Boolean(b) => serde_json::Value::Bool(*b),
            ParameterValue::Null => serde_json::Value::Null,
        }
    }

    /// Check if this is a null value
    pub fn is_null(&self) -> bool {
        matches!(self, ParameterValue::Null)
    }

    /// Try to extract as a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParameterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to extract as a number value
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to extract as a boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParameterValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mappings_insert_and_get() {
        let mut mappings = Mappings::new();
        mappings.insert("x", AestheticValue::column("height"));
        assert_eq!(mappings.len(), 1);
        assert!(mappings.contains_key("x"));
        assert_eq!(
            mappings.get("x").and_then(|v| v.column_name()),
            Some("height")
        );
    }

    #[test]
    fn test_aesthetic_value_display() {
        assert_eq!(AestheticValue::column("height").to_string(), "height");
        assert_eq!(
            AestheticValue::Literal(LiteralValue::String("blue".into())).to_string(),
            "'blue'"
        );
    }

    #[test]
    fn test_to_key_string_number_integer() {
        assert_eq!(LiteralValue::Number(25.0).to_key_string(), "25");
    }

    #[test]
    fn test_to_key_string_number_decimal() {
        assert_eq!(LiteralValue::Number(25.5).to_key_string(), "25.5");
    }

    #[test]
    fn test_to_key_string_string_unquoted() {
        assert_eq!(
            LiteralValue::String("dog".to_string()).to_key_string(),
            "dog"
        );
    }

    #[test]
    fn test_to_key_string_boolean() {
        assert_eq!(LiteralValue::Boolean(true).to_key_string(), "true");
    }

    #[test]
    fn test_literal_value_from_conversions() {
        assert_eq!(LiteralValue::from("dog"), LiteralValue::String("dog".into()));
        assert_eq!(LiteralValue::from(3i64), LiteralValue::Number(3.0));
        assert_eq!(LiteralValue::from(false), LiteralValue::Boolean(false));
    }

    #[test]
    fn test_parameter_value_accessors() {
        assert_eq!(
            ParameterValue::String("lm".to_string()).as_str(),
            Some("lm")
        );
        assert_eq!(ParameterValue::Number(2.0).as_number(), Some(2.0));
        assert_eq!(ParameterValue::Boolean(false).as_bool(), Some(false));
        assert!(ParameterValue::Null.is_null());
    }

    #[test]
    fn test_parameter_value_to_json() {
        assert_eq!(
            ParameterValue::String("lm".to_string()).to_json(),
            serde_json::json!("lm")
        );
        assert_eq!(ParameterValue::Null.to_json(), serde_json::Value::Null);
    }
}
