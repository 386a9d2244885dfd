//! Named dataset registry for edaplot
//!
//! A `DatasetStore` maps string identifiers to DataFrames so that
//! mutation helpers can address datasets by name. The store is an
//! explicit, caller-owned value: mutations are visible to any subsequent
//! reader of the same store, and exclusive access is expressed through
//! `&mut` borrows rather than process-global state.

use polars::prelude::DataFrame;
use std::collections::HashMap;

use crate::{EdaplotError, Result};

/// String-keyed registry of named DataFrames
#[derive(Debug, Clone, Default)]
pub struct DatasetStore {
    datasets: HashMap<String, DataFrame>,
}

impl DatasetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset under a name, replacing any previous entry
    pub fn register(&mut self, name: impl Into<String>, df: DataFrame) {
        let name = name.into();
        log::debug!("registering dataset '{}' ({} rows)", name, df.height());
        self.datasets.insert(name, df);
    }

    /// Look up a dataset by name
    ///
    /// # Errors
    ///
    /// Returns `EdaplotError::StoreError` if no dataset is registered
    /// under that name.
    pub fn get(&self, name: &str) -> Result<&DataFrame> {
        self.datasets.get(name).ok_or_else(|| {
            EdaplotError::StoreError(format!("No dataset registered under name '{}'", name))
        })
    }

    /// Check whether a dataset is registered under a name
    pub fn contains(&self, name: &str) -> bool {
        self.datasets.contains_key(name)
    }

    /// Remove a dataset by name, returning it if present
    pub fn remove(&mut self, name: &str) -> Option<DataFrame> {
        self.datasets.remove(name)
    }

    /// Names of all registered datasets
    pub fn names(&self) -> Vec<&str> {
        self.datasets.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered datasets
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    fn sample_frame() -> DataFrame {
        df! {
            "observation" => ["bird", "dog", "cat", "dog"],
        }
        .unwrap()
    }

    #[test]
    fn test_register_and_get() {
        let mut store = DatasetStore::new();
        store.register("df", sample_frame());

        assert!(store.contains("df"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("df").unwrap().height(), 4);
    }

    #[test]
    fn test_get_missing_is_store_error() {
        let store = DatasetStore::new();
        let err = store.get("absent").unwrap_err();
        assert!(matches!(err, EdaplotError::StoreError(_)));
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn test_register_replaces() {
        let mut store = DatasetStore::new();
        store.register("df", sample_frame());

        let other = df! { "x" => [1i32, 2] }.unwrap();
        store.register("df", other);

        assert_eq!(store.len(), 1);
        assert_eq!(store.get("df").unwrap().height(), 2);
    }

    #[test]
    fn test_remove() {
        let mut store = DatasetStore::new();
        store.register("df", sample_frame());

        assert!(store.remove("df").is_some());
        assert!(store.is_empty());
        assert!(store.remove("df").is_none());
    }

    #[test]
    fn test_names() {
        let mut store = DatasetStore::new();
        store.register("a", sample_frame());
        store.register("b", sample_frame());

        let mut names = store.names();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
    }
}
