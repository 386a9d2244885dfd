//! Layer type for edaplot visualization layers
//!
//! This module defines the Layer struct for representing a single
//! visualization layer (one geometry drawn over the data) in an edaplot
//! specification.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod geom;

// Re-export geom types for convenience
pub use geom::{DefaultParam, DefaultParamValue, Geom, GeomAesthetics, GeomTrait, GeomType};

use crate::plot::types::{AestheticValue, Mappings, ParameterValue};

/// A single visualization layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    /// Geometric object type
    pub geom: Geom,
    /// Aesthetic mappings
    pub mappings: Mappings,
    /// Geom parameters (not aesthetic mappings)
    pub parameters: HashMap<String, ParameterValue>,
}

impl Layer {
    /// Create a new layer with the given geom
    pub fn new(geom: Geom) -> Self {
        Self {
            geom,
            mappings: Mappings::new(),
            parameters: HashMap::new(),
        }
    }

    /// Add an aesthetic mapping
    pub fn with_aesthetic(mut self, aesthetic: impl Into<String>, value: AestheticValue) -> Self {
        self.mappings.insert(aesthetic, value);
        self
    }

    /// Add a parameter
    pub fn with_parameter(mut self, parameter: impl Into<String>, value: ParameterValue) -> Self {
        self.parameters.insert(parameter.into(), value);
        self
    }

    /// Get a column reference from an aesthetic, if it's mapped to a column
    pub fn get_column(&self, aesthetic: &str) -> Option<&str> {
        match self.mappings.get(aesthetic) {
            Some(AestheticValue::Column(name)) => Some(name),
            _ => None,
        }
    }

    /// Check if this layer has the required aesthetics for its geom
    pub fn validate_required_aesthetics(&self) -> std::result::Result<(), String> {
        for aesthetic in self.geom.aesthetics().required {
            if !self.mappings.contains_key(aesthetic) {
                return Err(format!(
                    "Geom '{}' requires aesthetic '{}' but it was not provided",
                    self.geom, aesthetic
                ));
            }
        }

        Ok(())
    }

    /// Apply default parameter values for any params not specified by user.
    pub fn apply_default_params(&mut self) {
        for param in self.geom.default_params() {
            if !self.parameters.contains_key(param.name) {
                let value = match &param.default {
                    DefaultParamValue::String(s) => ParameterValue::String(s.to_string()),
                    DefaultParamValue::Number(n) => ParameterValue::Number(*n),
                    DefaultParamValue::Boolean(b) => ParameterValue::Boolean(*b),
                    DefaultParamValue::Null => continue, // Don't insert null defaults
                };
                self.parameters.insert(param.name.to_string(), value);
            }
        }
    }

    /// Validate that all parameters are valid for this layer's geom
    pub fn validate_settings(&self) -> std::result::Result<(), String> {
        let valid = self.geom.valid_settings();
        for param_name in self.parameters.keys() {
            if !valid.contains(&param_name.as_str()) {
                return Err(format!(
                    "Invalid setting '{}' for geom '{}'. Valid settings are: {}",
                    param_name,
                    self.geom,
                    valid.join(", ")
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_builder() {
        let layer = Layer::new(Geom::point())
            .with_aesthetic("x", AestheticValue::column("height"))
            .with_aesthetic("y", AestheticValue::column("weight"));

        assert_eq!(layer.geom.geom_type(), GeomType::Point);
        assert_eq!(layer.get_column("x"), Some("height"));
        assert_eq!(layer.get_column("y"), Some("weight"));
        assert_eq!(layer.get_column("color"), None);
    }

    #[test]
    fn test_validate_required_aesthetics() {
        let complete = Layer::new(Geom::line())
            .with_aesthetic("x", AestheticValue::column("date"))
            .with_aesthetic("y", AestheticValue::column("value"));
        assert!(complete.validate_required_aesthetics().is_ok());

        let missing_y = Layer::new(Geom::line()).with_aesthetic("x", AestheticValue::column("date"));
        let err = missing_y.validate_required_aesthetics().unwrap_err();
        assert!(err.contains("'y'"));
    }

    #[test]
    fn test_apply_default_params() {
        let mut layer = Layer::new(Geom::smooth())
            .with_aesthetic("x", AestheticValue::column("a"))
            .with_aesthetic("y", AestheticValue::column("b"));
        layer.apply_default_params();

        assert_eq!(
            layer.parameters.get("method").and_then(|p| p.as_str()),
            Some("lm")
        );
        assert_eq!(
            layer.parameters.get("se").and_then(|p| p.as_bool()),
            Some(false)
        );
    }

    #[test]
    fn test_apply_default_params_keeps_user_values() {
        let mut layer = Layer::new(Geom::smooth())
            .with_parameter("method", ParameterValue::String("loess".to_string()));
        layer.apply_default_params();

        assert_eq!(
            layer.parameters.get("method").and_then(|p| p.as_str()),
            Some("loess")
        );
    }

    #[test]
    fn test_validate_settings() {
        let valid = Layer::new(Geom::smooth())
            .with_parameter("method", ParameterValue::String("lm".to_string()));
        assert!(valid.validate_settings().is_ok());

        let invalid = Layer::new(Geom::point())
            .with_parameter("bins", ParameterValue::Number(10.0));
        let err = invalid.validate_settings().unwrap_err();
        assert!(err.contains("bins"));
    }
}
