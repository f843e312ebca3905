mod primitive;
pub use primitive::Primitive;

mod value;
pub use value::Value;

/// A raw row: column name to value, in the order the columns were reported.
///
/// Rows double as parameter maps for validated construction and as predicate
/// maps for equality filters; in both cases iteration order is preserved.
pub type Row = indexmap::IndexMap<String, Value>;
