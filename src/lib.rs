/*!
# edaplot - Exploratory Data Analysis Plot Helpers

Convenience functions for quick exploratory plots over polars DataFrames,
plus a small registry of named datasets for derived-column mutations.

edaplot builds *plot specifications* - renderable chart descriptions made of
geometry layers, aesthetic mappings, labels, and a theme - and serializes
them to Vega-Lite JSON for a downstream renderer. It does not render pixels
or fit regressions itself; those are delegated to the output format.

## Example

```rust,ignore
use edaplot::{plot_correlation, writer::{Writer, VegaLiteWriter}};
use polars::prelude::*;

let df = df! {
    "height" => [1.62, 1.75, 1.81, 1.68],
    "weight" => [61.0, 74.5, 83.2, 66.0],
}?;

let prepared = plot_correlation(&df, "height", "weight");
let json = VegaLiteWriter::new().render(&prepared)?;
```

## Core Components

- [`api`] - High-level plot and mutation entry points
- [`plot`] - Plot specification types (layers, geoms, labels, theme)
- [`store`] - Named dataset registry
- [`mutate`] - Derived-column transformations
- [`writer`] - Output format abstraction layer
*/

pub mod api;
pub mod mutate;
pub mod naming;
pub mod plot;
pub mod store;

#[cfg(feature = "vegalite")]
pub mod writer;

// Re-export key types for convenience
pub use api::{
    add_binary_column, plot_correlation, plot_variable_over_time, Prepared,
    DEFAULT_TIME_SERIES_TITLE,
};
pub use mutate::with_binary_column;
pub use plot::{
    AestheticValue, Geom, GeomType, Labels, Layer, LiteralValue, Mappings, ParameterValue, Plot,
    Theme,
};
pub use store::DatasetStore;

// DataFrame abstraction (wraps Polars)
pub use polars::prelude::DataFrame;

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum EdaplotError {
    #[error("Store error: {0}")]
    StoreError(String),

    #[error("Column error: {0}")]
    ColumnError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Output generation error: {0}")]
    WriterError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type Result<T> = std::result::Result<T, EdaplotError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
