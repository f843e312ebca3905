use ormlet_core::{
    stmt::{Primitive, Value},
    Result,
};

use indexmap::IndexMap;

/// Per-instance storage of column values.
///
/// Columns that were never written are absent, which is distinct from a
/// column holding SQL `NULL`. Entries keep the order in which they were first
/// written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeStore {
    values: IndexMap<String, Value>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stored value, or `None` when the column was never written.
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.values.get(column)
    }

    /// Like [`get`](Self::get), but treats a stored `NULL` as absent.
    pub fn get_non_null(&self, column: &str) -> Option<&Value> {
        self.get(column).filter(|value| !value.is_null())
    }

    pub fn set(&mut self, column: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(column.into(), value.into());
    }

    /// Loads the stored value as `T`.
    ///
    /// Absent columns load as `None`, as do `NULL` values. Any other value
    /// that does not convert to `T` is a type-conversion error.
    pub fn load<T: Primitive>(&self, column: &str) -> Result<Option<T>> {
        match self.get_non_null(column) {
            Some(value) => T::load(value.clone()).map(Some),
            None => Ok(None),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values
            .iter()
            .map(|(column, value)| (column.as_str(), value))
    }
}
