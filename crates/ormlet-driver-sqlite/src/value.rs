use rusqlite::{
    types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef},
    Row,
};
use ormlet_core::stmt::Value as CoreValue;

#[derive(Debug)]
pub struct Value<'a>(&'a CoreValue);

impl<'a> From<&'a CoreValue> for Value<'a> {
    fn from(value: &'a CoreValue) -> Self {
        Self(value)
    }
}

/// Converts the SQLite value at `index` to an ormlet value.
///
/// SQLite has no boolean storage class, so booleans come back as integers.
pub fn from_sql(row: &Row, index: usize) -> rusqlite::Result<CoreValue> {
    let value: SqlValue = row.get(index)?;

    Ok(match value {
        SqlValue::Null => CoreValue::Null,
        SqlValue::Integer(value) => CoreValue::I64(value),
        SqlValue::Real(value) => CoreValue::F64(value),
        SqlValue::Text(value) => CoreValue::String(value),
        SqlValue::Blob(value) => CoreValue::Bytes(value),
    })
}

impl ToSql for Value<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self.0 {
            CoreValue::Bool(true) => ToSqlOutput::Owned(SqlValue::Integer(1)),
            CoreValue::Bool(false) => ToSqlOutput::Owned(SqlValue::Integer(0)),
            CoreValue::I64(v) => ToSqlOutput::Owned(SqlValue::Integer(*v)),
            CoreValue::F64(v) => ToSqlOutput::Owned(SqlValue::Real(*v)),
            CoreValue::String(v) => ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes())),
            CoreValue::Bytes(v) => ToSqlOutput::Borrowed(ValueRef::Blob(&v[..])),
            CoreValue::Null => ToSqlOutput::Owned(SqlValue::Null),
        })
    }
}
