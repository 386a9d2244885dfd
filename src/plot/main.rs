//! Plot types for edaplot specifications
//!
//! This module defines the typed Plot structure that represents a chart
//! description, providing a convenient interface for working with edaplot
//! specifications before they are handed to a writer.
//!
//! # Plot Structure
//!
//! ```text
//! Plot
//! ├─ layers: Vec<Layer>     (1+ geometry layers)
//! ├─ labels: Option<Labels> (optional title/axis text)
//! └─ theme: Option<Theme>   (optional styling)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::layer::Layer;
use super::types::{AestheticValue, ParameterValue};

/// Complete edaplot visualization specification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    /// Visual layers (one per geometry)
    pub layers: Vec<Layer>,
    /// Text labels (title and axis text)
    pub labels: Option<Labels>,
    /// Theme styling
    pub theme: Option<Theme>,
}

/// Text labels (label type → text)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Labels {
    /// Label assignments ("title", "x", "y", ...)
    pub labels: HashMap<String, String>,
}

impl Labels {
    /// Create an empty label set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a label
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.labels.insert(key.into(), text.into());
    }

    /// Get a label by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(|s| s.as_str())
    }
}

/// Theme styling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Base theme style
    pub style: Option<String>,
    /// Theme property overrides
    pub properties: HashMap<String, ParameterValue>,
}

impl Theme {
    /// The minimal theme: clean panel, light grid
    pub fn minimal() -> Self {
        Self {
            style: Some("minimal".to_string()),
            properties: HashMap::new(),
        }
    }
}

impl Plot {
    /// Create a new empty Plot
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            labels: None,
            theme: None,
        }
    }

    /// Check if the spec has any layers
    pub fn has_layers(&self) -> bool {
        !self.layers.is_empty()
    }

    /// Get the number of layers
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Set a label, creating the Labels struct on first use
    pub fn set_label(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.labels
            .get_or_insert_with(Labels::new)
            .insert(key, text);
    }

    /// Get a label by key
    pub fn get_label(&self, key: &str) -> Option<&str> {
        self.labels.as_ref().and_then(|l| l.get(key))
    }

    /// Compute aesthetic labels for axes.
    ///
    /// For each aesthetic mapped in any layer, determines the label:
    /// - If a label was set explicitly, it is kept
    /// - Otherwise, the mapped column name becomes the label
    ///
    /// Literal mappings contribute no label.
    pub fn compute_aesthetic_labels(&mut self) {
        // Ensure Labels struct exists
        let labels = self.labels.get_or_insert_with(Labels::new);

        for layer in &self.layers {
            for (aesthetic, value) in &layer.mappings.aesthetics {
                if labels.labels.contains_key(aesthetic) {
                    continue;
                }
                if let AestheticValue::Column(name) = value {
                    labels.labels.insert(aesthetic.clone(), name.clone());
                }
            }
        }
    }
}

impl Default for Plot {
    fn default() -> Self {
        Self::new()
    }
}
