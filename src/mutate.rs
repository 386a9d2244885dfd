//! Derived-column transformations for edaplot
//!
//! Currently a single transformation: appending a 0/1 indicator column
//! flagging rows equal to a target value. The pure [`with_binary_column`]
//! function takes and returns the DataFrame by value; the store-backed
//! variant lives in [`crate::api::add_binary_column`].

use polars::prelude::*;

use crate::naming;
use crate::plot::LiteralValue;
use crate::{EdaplotError, Result};

/// Return a copy of `df` with an appended indicator column flagging rows
/// of `column` equal to `value`.
///
/// The new column is named `"{value}_binary"` and holds `Int32` ones and
/// zeros. Null entries compare unequal and yield 0. Re-invoking with the
/// same value replaces the column rather than accumulating duplicates.
///
/// Comparison policy: numeric columns accept numeric values (compared
/// through a common f64 representation), string columns accept strings,
/// boolean columns accept booleans. Any other pairing is a type-mismatch
/// error rather than a silent all-zero column.
///
/// # Errors
///
/// - `EdaplotError::ColumnError` if `column` is not present in `df`, or
///   if the value's type is incompatible with the column's dtype.
pub fn with_binary_column(
    df: &DataFrame,
    column: &str,
    value: &LiteralValue,
) -> Result<DataFrame> {
    let series = df
        .column(column)
        .map_err(|_| {
            EdaplotError::ColumnError(format!("Column '{}' not found in dataset", column))
        })?
        .as_materialized_series();

    let flags = indicator_flags(series, value)?;
    let name = naming::binary_column(&value.to_key_string());
    log::debug!(
        "appending indicator column '{}' ({} matches over {} rows)",
        name,
        flags.iter().filter(|f| **f == 1).count(),
        flags.len()
    );
    let indicator = Series::new(name.as_str().into(), flags);

    let mut out = df.clone();
    out.with_column(indicator)
        .map_err(|e| EdaplotError::InternalError(format!("Failed to append column: {}", e)))?;
    Ok(out)
}

/// Compute the 0/1 flags for one column against a target value.
fn indicator_flags(series: &Series, value: &LiteralValue) -> Result<Vec<i32>> {
    match value {
        LiteralValue::String(target) => {
            let ca = series.str().map_err(|_| type_mismatch(series, value))?;
            Ok(ca
                .iter()
                .map(|v| i32::from(v == Some(target.as_str())))
                .collect())
        }
        LiteralValue::Number(target) => {
            if !series.dtype().is_primitive_numeric() {
                return Err(type_mismatch(series, value));
            }
            let cast = series
                .cast(&DataType::Float64)
                .map_err(|_| type_mismatch(series, value))?;
            let ca = cast
                .f64()
                .map_err(|e| EdaplotError::InternalError(format!("Failed to cast to f64: {}", e)))?;
            Ok(ca.iter().map(|v| i32::from(v == Some(*target))).collect())
        }
        LiteralValue::Boolean(target) => {
            let ca = series.bool().map_err(|_| type_mismatch(series, value))?;
            Ok(ca.iter().map(|v| i32::from(v == Some(*target))).collect())
        }
    }
}

fn type_mismatch(series: &Series, value: &LiteralValue) -> EdaplotError {
    EdaplotError::ColumnError(format!(
        "Cannot compare {} value {} against column '{}' of type {}",
        value.type_name(),
        value,
        series.name(),
        series.dtype()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn animals() -> DataFrame {
        df! {
            "observation" => ["bird", "dog", "cat", "dog"],
            "weight" => [0.4f64, 12.0, 4.5, 9.8],
        }
        .unwrap()
    }

    fn flags_of(df: &DataFrame, column: &str) -> Vec<Option<i32>> {
        df.column(column).unwrap().i32().unwrap().iter().collect()
    }

    #[test]
    fn test_string_indicator() {
        let out = with_binary_column(&animals(), "observation", &"dog".into()).unwrap();

        assert_eq!(flags_of(&out, "dog_binary"), vec![Some(0), Some(1), Some(0), Some(1)]);
        // Existing columns and row order are untouched
        assert_eq!(out.width(), 3);
        let names: Vec<String> = out.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, vec!["observation", "weight", "dog_binary"]);
    }

    #[test]
    fn test_no_matches_yields_zeros() {
        let out = with_binary_column(&animals(), "observation", &"fish".into()).unwrap();
        assert_eq!(flags_of(&out, "fish_binary"), vec![Some(0); 4]);
    }

    #[test]
    fn test_idempotent_overwrite() {
        let once = with_binary_column(&animals(), "observation", &"dog".into()).unwrap();
        let twice = with_binary_column(&once, "observation", &"dog".into()).unwrap();

        assert_eq!(once.width(), twice.width());
        assert_eq!(flags_of(&twice, "dog_binary"), flags_of(&once, "dog_binary"));
    }

    #[test]
    fn test_numeric_indicator_across_int_column() {
        let df = df! { "count" => [1i64, 3, 3, 7] }.unwrap();
        let out = with_binary_column(&df, "count", &3i64.into()).unwrap();

        // Integer value and Int64 column meet in f64; column name has no ".0"
        assert_eq!(flags_of(&out, "3_binary"), vec![Some(0), Some(1), Some(1), Some(0)]);
    }

    #[test]
    fn test_numeric_indicator_float_column() {
        let df = df! { "ratio" => [0.5f64, 1.25, 0.5] }.unwrap();
        let out = with_binary_column(&df, "ratio", &0.5f64.into()).unwrap();
        assert_eq!(flags_of(&out, "0.5_binary"), vec![Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn test_boolean_indicator() {
        let df = df! { "flag" => [true, false, true] }.unwrap();
        let out = with_binary_column(&df, "flag", &true.into()).unwrap();
        assert_eq!(flags_of(&out, "true_binary"), vec![Some(1), Some(0), Some(1)]);
    }

    #[test]
    fn test_null_entries_yield_zero() {
        let df = df! {
            "observation" => [Some("dog"), None, Some("cat")],
        }
        .unwrap();
        let out = with_binary_column(&df, "observation", &"dog".into()).unwrap();
        assert_eq!(flags_of(&out, "dog_binary"), vec![Some(1), Some(0), Some(0)]);
    }

    #[test]
    fn test_missing_column_is_column_error() {
        let err = with_binary_column(&animals(), "species", &"dog".into()).unwrap_err();
        assert!(matches!(err, EdaplotError::ColumnError(_)));
        assert!(err.to_string().contains("species"));
    }

    #[test]
    fn test_type_mismatch_is_column_error() {
        // String value against a numeric column
        let err = with_binary_column(&animals(), "weight", &"dog".into()).unwrap_err();
        assert!(matches!(err, EdaplotError::ColumnError(_)));
        assert!(err.to_string().contains("weight"));

        // Numeric value against a string column
        let err = with_binary_column(&animals(), "observation", &3i64.into()).unwrap_err();
        assert!(matches!(err, EdaplotError::ColumnError(_)));
    }
}
