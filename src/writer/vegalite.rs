//! Vega-Lite JSON writer implementation
//!
//! Converts edaplot specifications and DataFrames into Vega-Lite JSON
//! format for web-based interactive visualizations.
//!
//! # Mapping Strategy
//!
//! - edaplot Geom → Vega-Lite mark type
//! - edaplot aesthetics → Vega-Lite encoding channels
//! - edaplot layers → Vega-Lite layer composition
//! - Smooth layers → Vega-Lite `regression` transform (the renderer fits)
//! - Polars DataFrame → Vega-Lite inline data
//!
//! # Example
//!
//! ```rust,ignore
//! use edaplot::writer::{Writer, VegaLiteWriter};
//!
//! let writer = VegaLiteWriter::new();
//! let vega_json = writer.write(&spec, &data)?;
//! // Can be rendered in browser with vega-embed
//! ```

use crate::naming;
use crate::plot::{AestheticValue, GeomType, Layer, LiteralValue, Plot, Theme};
use crate::writer::Writer;
use crate::{DataFrame, EdaplotError, Result};
use polars::prelude::*;
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// Vega-Lite JSON writer
///
/// Generates Vega-Lite v6 specifications from edaplot specs and data.
pub struct VegaLiteWriter {
    /// Vega-Lite schema version
    schema: String,
}

impl VegaLiteWriter {
    /// Create a new Vega-Lite writer with default settings
    pub fn new() -> Self {
        Self {
            schema: "https://vega.github.io/schema/vega-lite/v6.json".to_string(),
        }
    }

    /// Convert Polars DataFrame to Vega-Lite data values (array of objects)
    fn dataframe_to_values(&self, df: &DataFrame) -> Result<Vec<Value>> {
        let mut values = Vec::new();
        let height = df.height();
        let column_names = df.get_column_names();

        for row_idx in 0..height {
            let mut row_obj = Map::new();

            for (col_idx, col_name) in column_names.iter().enumerate() {
                let column = df.get_columns().get(col_idx).ok_or_else(|| {
                    EdaplotError::WriterError(format!("Failed to get column {}", col_name))
                })?;

                // Get value from series and convert to JSON Value
                let value = self.series_value_at(column.as_materialized_series(), row_idx)?;
                row_obj.insert(col_name.to_string(), value);
            }

            values.push(Value::Object(row_obj));
        }

        Ok(values)
    }

    /// Get a single value from a series at a given index as JSON Value
    fn series_value_at(&self, series: &Series, idx: usize) -> Result<Value> {
        use DataType::*;

        match series.dtype() {
            Int8 => {
                let ca = series.i8().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to i8: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Int16 => {
                let ca = series.i16().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to i16: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Int32 => {
                let ca = series.i32().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to i32: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Int64 => {
                let ca = series.i64().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to i64: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Float32 => {
                let ca = series.f32().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to f32: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Float64 => {
                let ca = series.f64().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to f64: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Boolean => {
                let ca = series.bool().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to bool: {}", e))
                })?;
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            String => {
                let ca = series.str().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to string: {}", e))
                })?;
                // Values keep their column dtype; categorical strings that
                // happen to look numeric stay strings
                Ok(ca.get(idx).map(|v| json!(v)).unwrap_or(Value::Null))
            }
            Date => {
                // Convert days since epoch to ISO date string: "YYYY-MM-DD"
                let ca = series.date().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to date: {}", e))
                })?;
                if let Some(days) = ca.phys.get(idx) {
                    let unix_epoch = chrono::NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
                    let date = unix_epoch + chrono::Duration::days(days as i64);
                    Ok(json!(date.format("%Y-%m-%d").to_string()))
                } else {
                    Ok(Value::Null)
                }
            }
            Datetime(time_unit, _) => {
                // Convert timestamp to ISO datetime: "YYYY-MM-DDTHH:MM:SS.sssZ"
                let ca = series.datetime().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to datetime: {}", e))
                })?;
                if let Some(timestamp) = ca.phys.get(idx) {
                    // Convert to microseconds based on time unit
                    let micros = match time_unit {
                        TimeUnit::Microseconds => timestamp,
                        TimeUnit::Milliseconds => timestamp * 1_000,
                        TimeUnit::Nanoseconds => timestamp / 1_000,
                    };
                    let secs = micros / 1_000_000;
                    let nsecs = ((micros % 1_000_000) * 1000) as u32;
                    let dt = chrono::DateTime::<chrono::Utc>::from_timestamp(secs, nsecs)
                        .unwrap_or_else(|| {
                            chrono::DateTime::<chrono::Utc>::from_timestamp(0, 0).unwrap()
                        });
                    Ok(json!(dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()))
                } else {
                    Ok(Value::Null)
                }
            }
            Time => {
                // Convert nanoseconds since midnight to ISO time: "HH:MM:SS.sss"
                let ca = series.time().map_err(|e| {
                    EdaplotError::WriterError(format!("Failed to cast to time: {}", e))
                })?;
                if let Some(nanos) = ca.phys.get(idx) {
                    let hours = nanos / 3_600_000_000_000;
                    let minutes = (nanos % 3_600_000_000_000) / 60_000_000_000;
                    let seconds = (nanos % 60_000_000_000) / 1_000_000_000;
                    let millis = (nanos % 1_000_000_000) / 1_000_000;
                    Ok(json!(format!(
                        "{:02}:{:02}:{:02}.{:03}",
                        hours, minutes, seconds, millis
                    )))
                } else {
                    Ok(Value::Null)
                }
            }
            _ => {
                // Fallback: convert to string
                Ok(json!(series
                    .get(idx)
                    .map(|v| v.to_string())
                    .unwrap_or_default()))
            }
        }
    }

    /// Map an edaplot geom to a Vega-Lite mark object.
    ///
    /// Smooth becomes a line mark; its regression fit is supplied by a
    /// layer transform, not the mark itself.
    fn geom_to_mark(&self, geom_type: GeomType) -> Value {
        let mark_type = match geom_type {
            GeomType::Point => "point",
            GeomType::Line => "line",
            GeomType::Smooth => "line",
        };
        json!({
            "type": mark_type,
            "clip": true
        })
    }

    /// Infer a Vega-Lite field type from the column's dtype
    fn infer_field_type(&self, df: &DataFrame, field: &str) -> String {
        let dtype = match df.column(field) {
            Ok(column) => column.dtype().clone(),
            Err(_) => return "nominal".to_string(),
        };

        if dtype.is_primitive_numeric() {
            "quantitative".to_string()
        } else if matches!(
            dtype,
            DataType::Date | DataType::Datetime(_, _) | DataType::Time
        ) {
            "temporal".to_string()
        } else {
            "nominal".to_string()
        }
    }

    /// Map edaplot aesthetic names to Vega-Lite encoding channel names
    fn map_aesthetic_name(&self, aesthetic: &str) -> String {
        match aesthetic {
            "linewidth" => "strokeWidth".to_string(),
            "linetype" => "strokeDash".to_string(),
            _ => aesthetic.to_string(),
        }
    }

    /// Build the encoding object for a layer
    fn build_encoding(&self, layer: &Layer, df: &DataFrame, spec: &Plot) -> Result<Value> {
        let mut encoding = Map::new();

        for (aesthetic, value) in &layer.mappings.aesthetics {
            let channel_name = self.map_aesthetic_name(aesthetic);

            let channel = match value {
                AestheticValue::Column(name) => {
                    let mut channel = json!({
                        "field": name,
                        "type": self.infer_field_type(df, name),
                    });
                    if let Some(label) = spec.get_label(aesthetic) {
                        channel["title"] = json!(label);
                    }
                    channel
                }
                AestheticValue::Literal(lit) => match lit {
                    LiteralValue::String(s) => json!({ "value": s }),
                    LiteralValue::Number(n) => json!({ "value": n }),
                    LiteralValue::Boolean(b) => json!({ "value": b }),
                },
            };

            encoding.insert(channel_name, channel);
        }

        Ok(Value::Object(encoding))
    }

    /// Build the regression transform for a smooth layer.
    ///
    /// Returns `None` for non-smooth layers. The fit is computed by the
    /// renderer; only the linear method is supported and standard-error
    /// bands are not emitted.
    fn regression_transform(&self, layer: &Layer) -> Result<Option<Value>> {
        if layer.geom.geom_type() != GeomType::Smooth {
            return Ok(None);
        }

        let method = layer
            .parameters
            .get("method")
            .and_then(|p| p.as_str())
            .unwrap_or("lm");
        if method != "lm" {
            return Err(EdaplotError::WriterError(format!(
                "Smooth method '{}' is not supported; only 'lm' is available",
                method
            )));
        }

        if layer.parameters.get("se").and_then(|p| p.as_bool()) == Some(true) {
            return Err(EdaplotError::WriterError(
                "Standard-error bands for smooth layers are not supported".to_string(),
            ));
        }

        // Required aesthetics are checked during validation
        let x = layer.get_column("x").ok_or_else(|| {
            EdaplotError::WriterError("Smooth layer has no x column mapped".to_string())
        })?;
        let y = layer.get_column("y").ok_or_else(|| {
            EdaplotError::WriterError("Smooth layer has no y column mapped".to_string())
        })?;

        Ok(Some(json!({
            "regression": y,
            "on": x
        })))
    }

    /// Validate that every column a layer maps exists in its data
    fn validate_layer_columns(&self, layer: &Layer, df: &DataFrame, layer_idx: usize) -> Result<()> {
        for (aesthetic, value) in &layer.mappings.aesthetics {
            if let AestheticValue::Column(name) = value {
                if df.column(name).is_err() {
                    return Err(EdaplotError::WriterError(format!(
                        "Column '{}' (mapped to '{}') not found in data for layer {}",
                        name,
                        aesthetic,
                        layer_idx + 1
                    )));
                }
            }
        }
        Ok(())
    }

    /// Build the Vega-Lite config for the spec's theme.
    ///
    /// No theme (or an unknown style) falls back to the gray default;
    /// the "minimal" style maps to a clean panel with a light grid.
    fn theme_config(&self, theme: Option<&Theme>) -> Value {
        match theme.and_then(|t| t.style.as_deref()) {
            Some("minimal") => self.minimal_theme_config(),
            _ => self.default_theme_config(),
        }
    }

    /// Default Vega-Lite config matching ggplot2's theme_gray()
    fn default_theme_config(&self) -> Value {
        json!({
            "view": {
                "stroke": null,
                "fill": "#EBEBEB"
            },
            "axis": {
                "domain": false,
                "grid": true,
                "gridColor": "#FFFFFF",
                "gridWidth": 1,
                "tickColor": "#333333",
                "labelColor": "#4D4D4D",
                "titleColor": "#000000",
                "titleFontWeight": "normal"
            }
        })
    }

    /// Vega-Lite config for the minimal theme: no panel fill or border,
    /// light grid, no axis domain or ticks
    fn minimal_theme_config(&self) -> Value {
        json!({
            "view": {
                "stroke": null
            },
            "axis": {
                "domain": false,
                "grid": true,
                "gridColor": "#EBEBEB",
                "gridWidth": 1,
                "ticks": false,
                "labelColor": "#4D4D4D",
                "titleColor": "#000000",
                "titleFontWeight": "normal"
            }
        })
    }
}

impl Default for VegaLiteWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer for VegaLiteWriter {
    type Output = String;

    fn write(&self, spec: &Plot, data: &HashMap<String, DataFrame>) -> Result<String> {
        // Validate spec before processing
        self.validate(spec)?;

        let df = data.get(naming::GLOBAL_DATA_KEY).ok_or_else(|| {
            EdaplotError::WriterError(format!(
                "Missing data source '{}'",
                naming::GLOBAL_DATA_KEY
            ))
        })?;

        // Validate column references before serializing anything
        for (layer_idx, layer) in spec.layers.iter().enumerate() {
            self.validate_layer_columns(layer, df, layer_idx)?;
        }

        // Build the base Vega-Lite spec
        let mut vl_spec = json!({
            "$schema": self.schema
        });

        // Responsive plot sizing
        vl_spec["width"] = json!("container");
        vl_spec["height"] = json!("container");

        // Add title if present
        if let Some(title) = spec.get_label("title") {
            vl_spec["title"] = json!(title);
        }

        // Build datasets - convert all DataFrames to Vega-Lite format
        let mut datasets = Map::new();
        for (key, df) in data {
            let values = self.dataframe_to_values(df)?;
            datasets.insert(key.clone(), json!(values));
        }
        vl_spec["datasets"] = Value::Object(datasets);

        // Build layers array
        let mut layers = Vec::new();
        for layer in &spec.layers {
            let mut layer_spec = json!({
                "data": {"name": naming::GLOBAL_DATA_KEY},
                "mark": self.geom_to_mark(layer.geom.geom_type())
            });

            if let Some(transform) = self.regression_transform(layer)? {
                layer_spec["transform"] = json!([transform]);
            }

            layer_spec["encoding"] = self.build_encoding(layer, df, spec)?;
            layers.push(layer_spec);
        }
        vl_spec["layer"] = json!(layers);

        // Theme config
        vl_spec["config"] = self.theme_config(spec.theme.as_ref());

        serde_json::to_string_pretty(&vl_spec).map_err(|e| {
            EdaplotError::WriterError(format!("Failed to serialize Vega-Lite JSON: {}", e))
        })
    }

    fn validate(&self, spec: &Plot) -> Result<()> {
        // Check that we have at least one layer
        if spec.layers.is_empty() {
            return Err(EdaplotError::ValidationError(
                "VegaLiteWriter requires at least one layer".to_string(),
            ));
        }

        // Validate each layer
        for layer in &spec.layers {
            layer.validate_required_aesthetics().map_err(|e| {
                EdaplotError::ValidationError(format!("Layer validation failed: {}", e))
            })?;

            layer.validate_settings().map_err(|e| {
                EdaplotError::ValidationError(format!("Layer validation failed: {}", e))
            })?;
        }

        Ok(())
    }
}
