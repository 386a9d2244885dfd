//! Centralized naming conventions for edaplot-generated identifiers.
//!
//! Internal data-map keys use a double-underscore prefix/suffix pattern to
//! avoid collision with user-defined names. Derived column names are built
//! from user values plus a literal suffix.
//!
//! # Categories
//!
//! - **Data keys**: Keys for data sources in the prepared data map (`__edaplot_global__`)
//! - **Binary columns**: Derived 0/1 indicator columns (`<value>_binary`)

use const_format::concatcp;

// ============================================================================
// Base Building Blocks
// ============================================================================

/// Base prefix for all edaplot internal identifiers
const EDAPLOT_PREFIX: &str = "__edaplot_";

/// Suffix for all edaplot internal identifiers (double underscore)
const EDAPLOT_SUFFIX: &str = "__";

/// Suffix appended to a value's textual form to name its indicator column
const BINARY_SUFFIX: &str = "_binary";

// ============================================================================
// Derived Constants
// ============================================================================

/// Key for the plot's data in the prepared data map.
/// This is an internal map key, never a user-visible column name.
pub const GLOBAL_DATA_KEY: &str = concatcp!(EDAPLOT_PREFIX, "global", EDAPLOT_SUFFIX);

// ============================================================================
// Constructor Functions
// ============================================================================

/// Generate the indicator column name for a target value.
///
/// The value's textual form is concatenated with the `_binary` suffix.
/// Invoking the mutator twice with the same value therefore produces the
/// same column name, and the second call overwrites the first.
///
/// # Example
/// ```
/// use edaplot::naming;
/// assert_eq!(naming::binary_column("dog"), "dog_binary");
/// assert_eq!(naming::binary_column("3"), "3_binary");
/// ```
pub fn binary_column(value_key: &str) -> String {
    format!("{}{}", value_key, BINARY_SUFFIX)
}

// ============================================================================
// Detection Functions
// ============================================================================

/// Check if a column name is a derived indicator column.
///
/// # Example
/// ```
/// use edaplot::naming;
/// assert!(naming::is_binary_column("dog_binary"));
/// assert!(!naming::is_binary_column("dog"));
/// ```
pub fn is_binary_column(name: &str) -> bool {
    name.ends_with(BINARY_SUFFIX) && name.len() > BINARY_SUFFIX.len()
}

/// Check if a name is an internal edaplot data-map key.
///
/// # Example
/// ```
/// use edaplot::naming;
/// assert!(naming::is_internal_key("__edaplot_global__"));
/// assert!(!naming::is_internal_key("revenue"));
/// ```
pub fn is_internal_key(name: &str) -> bool {
    name.starts_with(EDAPLOT_PREFIX) && name.ends_with(EDAPLOT_SUFFIX)
}
