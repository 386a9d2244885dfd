//! High-level edaplot API.
//!
//! The three exploratory helpers: `plot_correlation`,
//! `plot_variable_over_time`, and `add_binary_column`. The plot helpers
//! return a [`Prepared`] specification ready for rendering.

use std::collections::HashMap;

use crate::mutate::with_binary_column;
use crate::naming;
use crate::plot::{AestheticValue, Geom, Labels, Layer, LiteralValue, Plot, Theme};
use crate::store::DatasetStore;
use crate::{DataFrame, Result};

#[cfg(feature = "vegalite")]
use crate::writer::Writer;

/// Default title for time-series plots when none is given
pub const DEFAULT_TIME_SERIES_TITLE: &str = "Variable over Time";

// ============================================================================
// Core Types
// ============================================================================

/// A plot specification paired with the data it describes, ready for
/// rendering.
pub struct Prepared {
    /// Resolved plot specification
    plot: Plot,
    /// Internal data map (keyed DataFrames)
    data: HashMap<String, DataFrame>,
    /// Cached metadata about the prepared visualization
    metadata: Metadata,
}

impl Prepared {
    /// Create a new Prepared from a plot and its data
    pub(crate) fn new(plot: Plot, df: DataFrame) -> Self {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();
        let metadata = Metadata {
            rows: df.height(),
            columns,
            layer_count: plot.layers.len(),
        };

        let mut data = HashMap::new();
        data.insert(naming::GLOBAL_DATA_KEY.to_string(), df);

        Self {
            plot,
            data,
            metadata,
        }
    }

    /// Render to output format (e.g., Vega-Lite JSON).
    #[cfg(feature = "vegalite")]
    pub fn render<W: Writer>(&self, writer: &W) -> Result<W::Output> {
        writer.write(&self.plot, &self.data)
    }

    /// Get the resolved plot specification.
    pub fn plot(&self) -> &Plot {
        &self.plot
    }

    /// Get visualization metadata.
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.plot.layers.len()
    }

    /// Get the plot's data.
    pub fn data(&self) -> Option<&DataFrame> {
        self.data.get(naming::GLOBAL_DATA_KEY)
    }

    /// Get internal data map (all DataFrames by key).
    pub fn data_map(&self) -> &HashMap<String, DataFrame> {
        &self.data
    }
}

/// Metadata about the prepared visualization.
#[derive(Debug, Clone)]
pub struct Metadata {
    pub rows: usize,
    pub columns: Vec<String>,
    pub layer_count: usize,
}

// ============================================================================
// High-Level API Functions
// ============================================================================

/// Build a scatter plot of two columns with a fitted linear trend line.
///
/// The spec maps `x_var` to the horizontal axis and `y_var` to the
/// vertical axis, overlays a linear fit with no standard-error band, and
/// titles the chart `"Correlation between {x_var} and {y_var}"`. Axis
/// labels are the raw column names.
///
/// Columns are not validated here; a missing or non-numeric column
/// surfaces as the writer's native error at render time.
pub fn plot_correlation(data: &DataFrame, x_var: &str, y_var: &str) -> Prepared {
    let mut plot = Plot::new();

    plot.layers.push(
        Layer::new(Geom::point())
            .with_aesthetic("x", AestheticValue::column(x_var))
            .with_aesthetic("y", AestheticValue::column(y_var)),
    );

    let mut trend = Layer::new(Geom::smooth())
        .with_aesthetic("x", AestheticValue::column(x_var))
        .with_aesthetic("y", AestheticValue::column(y_var));
    trend.apply_default_params();
    plot.layers.push(trend);

    plot.set_label(
        "title",
        format!("Correlation between {} and {}", x_var, y_var),
    );
    plot.compute_aesthetic_labels();

    Prepared::new(plot, data.clone())
}

/// Build a line chart of one column over a date-like column.
///
/// The horizontal axis is always labelled `"Date"` and the vertical axis
/// `"Value"`, regardless of the actual column names. The title defaults
/// to `"Variable over Time"`. The minimal theme is applied.
pub fn plot_variable_over_time(
    data: &DataFrame,
    date_column: &str,
    variable_column: &str,
    title: Option<&str>,
) -> Prepared {
    let mut plot = Plot::new();

    plot.layers.push(
        Layer::new(Geom::line())
            .with_aesthetic("x", AestheticValue::column(date_column))
            .with_aesthetic("y", AestheticValue::column(variable_column)),
    );

    let mut labels = Labels::new();
    labels.insert("title", title.unwrap_or(DEFAULT_TIME_SERIES_TITLE));
    labels.insert("x", "Date");
    labels.insert("y", "Value");
    plot.labels = Some(labels);
    plot.theme = Some(Theme::minimal());

    Prepared::new(plot, data.clone())
}

/// Append a binary indicator column to a dataset registered in `store`.
///
/// Looks up `df_name`, flags rows of `column_name` equal to `value` with
/// 1 (else 0) in a new column named `"{value}_binary"`, and writes the
/// mutated dataset back under the same name. The effect is visible to any
/// subsequent reader of the store.
///
/// # Errors
///
/// - `EdaplotError::StoreError` if `df_name` is not registered; no entry
///   is created under that name.
/// - `EdaplotError::ColumnError` if `column_name` is absent or the value
///   type is incompatible with the column; the stored dataset is left
///   unmodified.
pub fn add_binary_column(
    store: &mut DatasetStore,
    df_name: &str,
    column_name: &str,
    value: impl Into<LiteralValue>,
) -> Result<()> {
    let value = value.into();
    let df = store.get(df_name)?;
    let mutated = with_binary_column(df, column_name, &value)?;
    store.register(df_name, mutated);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EdaplotError;
    use polars::prelude::*;

    fn measurements() -> DataFrame {
        df! {
            "height" => [1.62f64, 1.75, 1.81, 1.68],
            "weight" => [61.0f64, 74.5, 83.2, 66.0],
        }
        .unwrap()
    }

    #[test]
    fn test_plot_correlation_title_and_labels() {
        let prepared = plot_correlation(&measurements(), "height", "weight");
        let plot = prepared.plot();

        assert_eq!(
            plot.get_label("title"),
            Some("Correlation between height and weight")
        );
        assert_eq!(plot.get_label("x"), Some("height"));
        assert_eq!(plot.get_label("y"), Some("weight"));
    }

    #[test]
    fn test_plot_correlation_layers() {
        let prepared = plot_correlation(&measurements(), "height", "weight");
        let plot = prepared.plot();

        assert_eq!(plot.layer_count(), 2);
        assert_eq!(plot.layers[0].geom, Geom::point());
        assert_eq!(plot.layers[1].geom, Geom::smooth());

        // Both layers map the same columns
        for layer in &plot.layers {
            assert_eq!(layer.get_column("x"), Some("height"));
            assert_eq!(layer.get_column("y"), Some("weight"));
        }

        // Linear fit without a standard-error band
        let trend = &plot.layers[1];
        assert_eq!(
            trend.parameters.get("method").and_then(|p| p.as_str()),
            Some("lm")
        );
        assert_eq!(
            trend.parameters.get("se").and_then(|p| p.as_bool()),
            Some(false)
        );
    }

    #[test]
    fn test_plot_correlation_metadata() {
        let prepared = plot_correlation(&measurements(), "height", "weight");
        let metadata = prepared.metadata();

        assert_eq!(metadata.rows, 4);
        assert_eq!(metadata.columns, vec!["height", "weight"]);
        assert_eq!(metadata.layer_count, 2);
        assert_eq!(prepared.data().unwrap().height(), 4);
    }

    #[test]
    fn test_plot_variable_over_time_default_title() {
        let df = df! {
            "day" => ["2024-01-01", "2024-01-02"],
            "revenue" => [120.0f64, 98.5],
        }
        .unwrap();

        let prepared = plot_variable_over_time(&df, "day", "revenue", None);
        let plot = prepared.plot();

        assert_eq!(plot.get_label("title"), Some("Variable over Time"));
        // Axis labels are fixed regardless of the column names
        assert_eq!(plot.get_label("x"), Some("Date"));
        assert_eq!(plot.get_label("y"), Some("Value"));
        assert_eq!(plot.layer_count(), 1);
        assert_eq!(plot.layers[0].geom, Geom::line());
        assert_eq!(
            plot.theme.as_ref().and_then(|t| t.style.as_deref()),
            Some("minimal")
        );
    }

    #[test]
    fn test_plot_variable_over_time_explicit_title() {
        let df = df! {
            "day" => ["2024-01-01", "2024-01-02"],
            "revenue" => [120.0f64, 98.5],
        }
        .unwrap();

        let prepared = plot_variable_over_time(&df, "day", "revenue", Some("Daily Revenue"));
        assert_eq!(prepared.plot().get_label("title"), Some("Daily Revenue"));
    }

    fn animal_store() -> DatasetStore {
        let df = df! {
            "observation" => ["bird", "dog", "cat", "dog"],
        }
        .unwrap();
        let mut store = DatasetStore::new();
        store.register("df", df);
        store
    }

    #[test]
    fn test_add_binary_column_mutates_store() {
        let mut store = animal_store();
        add_binary_column(&mut store, "df", "observation", "dog").unwrap();

        let df = store.get("df").unwrap();
        let flags: Vec<Option<i32>> = df.column("dog_binary").unwrap().i32().unwrap().iter().collect();
        assert_eq!(flags, vec![Some(0), Some(1), Some(0), Some(1)]);

        // Original column untouched
        let obs: Vec<Option<&str>> = df
            .column("observation")
            .unwrap()
            .str()
            .unwrap()
            .iter()
            .collect();
        assert_eq!(obs, vec![Some("bird"), Some("dog"), Some("cat"), Some("dog")]);
    }

    #[test]
    fn test_add_binary_column_idempotent() {
        let mut store = animal_store();
        add_binary_column(&mut store, "df", "observation", "dog").unwrap();
        let once = store.get("df").unwrap().clone();

        add_binary_column(&mut store, "df", "observation", "dog").unwrap();
        let twice = store.get("df").unwrap();

        assert_eq!(twice.width(), once.width());
        assert!(twice.equals(&once));
    }

    #[test]
    fn test_add_binary_column_missing_dataset() {
        let mut store = animal_store();
        let err = add_binary_column(&mut store, "nope", "observation", "dog").unwrap_err();

        assert!(matches!(err, EdaplotError::StoreError(_)));
        // The failed call must not create an entry
        assert!(!store.contains("nope"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_binary_column_missing_column_leaves_store() {
        let mut store = animal_store();
        let err = add_binary_column(&mut store, "df", "species", "dog").unwrap_err();

        assert!(matches!(err, EdaplotError::ColumnError(_)));
        // Stored dataset unmodified
        let df = store.get("df").unwrap();
        assert_eq!(df.width(), 1);
    }
}
