//! Builders for every statement shape the model layer issues.
//!
//! Each function returns the SQL text together with its positional
//! arguments, in placeholder order.

use crate::{
    stmt::{
        Assignment, Delete, Expr, Ident, Insert, Join, Projection, Select, Statement,
        TableWithJoins, Update,
    },
    Serializer,
};

use ormlet_core::stmt::{Row, Value};

/// `SELECT {table}.* FROM {table}`
pub fn select_all(table: &str) -> (String, Vec<Value>) {
    serialize(Select {
        project: Projection::Wildcard(table.into()),
        from: TableWithJoins::table(table),
        selection: None,
    })
}

/// `SELECT {table}.* FROM {table} WHERE {key_column} = ?`
pub fn select_by_key(
    table: &str,
    key_column: &str,
    value: impl Into<Value>,
) -> (String, Vec<Value>) {
    serialize(Select {
        project: Projection::Wildcard(table.into()),
        from: TableWithJoins::table(table),
        selection: Some(Expr::eq(Expr::column(key_column), Expr::value(value))),
    })
}

/// `SELECT {table}.* FROM {table} WHERE {k1} = ? AND {k2} = ? ...`, in the
/// predicate map's order.
///
/// An empty map produces the same statement as [`select_all`].
pub fn select_by_predicates(table: &str, predicates: &Row) -> (String, Vec<Value>) {
    let operands = predicates
        .iter()
        .map(|(column, value)| Expr::eq(Expr::column(column), Expr::value(value)))
        .collect();

    serialize(Select {
        project: Projection::Wildcard(table.into()),
        from: TableWithJoins::table(table),
        selection: Expr::and_from_vec(operands),
    })
}

/// `INSERT INTO {table} ({col1, col2, ...}) VALUES (?, ?, ...)`
///
/// `values` must line up with `columns`.
pub fn insert<C: AsRef<str>>(
    table: &str,
    columns: &[C],
    values: Vec<Value>,
) -> (String, Vec<Value>) {
    serialize(Insert {
        table: table.into(),
        columns: columns.iter().map(|c| Ident::from(c.as_ref())).collect(),
        values: values.into_iter().map(Expr::Value).collect(),
    })
}

/// `UPDATE {table} SET {col1} = ?, ... WHERE {key_column} = ?`
///
/// Arguments are the values in column order followed by `key_value`.
pub fn update<C: AsRef<str>>(
    table: &str,
    columns: &[C],
    values: Vec<Value>,
    key_column: &str,
    key_value: impl Into<Value>,
) -> (String, Vec<Value>) {
    assert_eq!(
        columns.len(),
        values.len(),
        "UPDATE column and value counts differ"
    );

    let assignments = columns
        .iter()
        .zip(values)
        .map(|(column, value)| Assignment {
            target: column.as_ref().into(),
            value: Expr::Value(value),
        })
        .collect();

    serialize(Update {
        table: table.into(),
        assignments,
        selection: Some(Expr::eq(Expr::column(key_column), Expr::value(key_value))),
    })
}

/// `DELETE FROM {table} WHERE {key_column} = ?`
pub fn delete_by_key(
    table: &str,
    key_column: &str,
    value: impl Into<Value>,
) -> (String, Vec<Value>) {
    serialize(Delete {
        from: table.into(),
        selection: Some(Expr::eq(Expr::column(key_column), Expr::value(value))),
    })
}

/// `SELECT {right}.* FROM {left} JOIN {right} ON {on} WHERE {left}.{filter_column} = ?`
pub fn join_select(
    left_table: &str,
    right_table: &str,
    on: Expr,
    filter_column: &str,
    filter_value: impl Into<Value>,
) -> (String, Vec<Value>) {
    serialize(Select {
        project: Projection::Wildcard(right_table.into()),
        from: TableWithJoins {
            table: left_table.into(),
            joins: vec![Join {
                table: right_table.into(),
                constraint: on,
            }],
        },
        selection: Some(Expr::eq(
            Expr::qualified(left_table, filter_column),
            Expr::value(filter_value),
        )),
    })
}

fn serialize(stmt: impl Into<Statement>) -> (String, Vec<Value>) {
    let mut params = Vec::<Value>::new();
    let sql = Serializer::new().serialize(&stmt.into(), &mut params);
    (sql, params)
}
