//! Plot types for edaplot visualization specifications
//!
//! This module contains all the types that represent an edaplot
//! visualization specification, including the main Plot struct, layers,
//! geoms, labels, themes, and input types.
//!
//! # Architecture
//!
//! The module is organized into submodules:
//!
//! - `main` - Main Plot struct and Labels/Theme types
//! - `types` - Value types: Mappings, AestheticValue, ParameterValue, etc.
//! - `layer` - Layer struct and Geom subsystem

pub mod layer;
pub mod main;
pub mod types;

// Re-export all types for convenience
pub use layer::*;
pub use main::*;
pub use types::*;
