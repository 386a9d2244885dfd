//! Output writer abstraction layer for edaplot
//!
//! The writer module provides a pluggable interface for generating
//! visualization outputs from Plot + DataFrame combinations.
//!
//! # Architecture
//!
//! All writers implement the `Writer` trait, which provides:
//! - Spec + Data → Output conversion
//! - Validation for writer compatibility
//! - Format-specific rendering logic
//!
//! # Example
//!
//! ```rust,ignore
//! use edaplot::plot_correlation;
//! use edaplot::writer::{Writer, VegaLiteWriter};
//!
//! let prepared = plot_correlation(&df, "height", "weight");
//!
//! let writer = VegaLiteWriter::new();
//! let json = writer.render(&prepared)?;
//! println!("{}", json);
//! ```

use crate::api::Prepared;
use crate::{DataFrame, Plot, Result};
use std::collections::HashMap;

pub mod vegalite;

pub use vegalite::VegaLiteWriter;

/// Trait for visualization output writers
///
/// Writers take a Plot and data sources and produce formatted output
/// (JSON, PNG bytes, etc.).
///
/// # Associated Types
///
/// * `Output` - The type returned by `write()` and `render()`. Use `String`
///   for text output, `Vec<u8>` for binary, etc.
pub trait Writer {
    /// The output type produced by this writer.
    type Output;

    /// Generate output from a visualization specification and data sources
    ///
    /// # Arguments
    ///
    /// * `spec` - The plot specification
    /// * `data` - A map of data source names to DataFrames. The writer
    ///   decides how to use these based on the spec's layer configurations.
    ///
    /// # Errors
    ///
    /// Returns `EdaplotError::WriterError` if:
    /// - The spec is incompatible with this writer
    /// - The data doesn't match the spec's requirements
    /// - Output generation fails
    fn write(&self, spec: &Plot, data: &HashMap<String, DataFrame>) -> Result<Self::Output>;

    /// Validate that a spec is compatible with this writer
    ///
    /// Checks whether the spec can be rendered by this writer without
    /// actually generating output.
    fn validate(&self, spec: &Plot) -> Result<()>;

    /// Render a Prepared specification to the output format
    ///
    /// This is the main entry point for generating visualization output.
    fn render(&self, prepared: &Prepared) -> Result<Self::Output> {
        self.write(prepared.plot(), prepared.data_map())
    }
}
