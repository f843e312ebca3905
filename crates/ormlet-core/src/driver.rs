use crate::{
    async_trait,
    stmt::{Row, Value},
    Result,
};

use std::fmt::Debug;

/// The data-access collaborator.
///
/// ormlet never opens or closes connections itself; it hands fully-built,
/// parameterized SQL to a driver and gets rows (or a new key) back. Every call
/// is a single statement, committed independently unless the caller wraps a
/// sequence of calls in its own transaction.
#[async_trait]
pub trait Driver: Debug + Send + Sync + 'static {
    /// Execute a statement, returning every row it produced in order.
    ///
    /// Statements that produce no rows (UPDATE, DELETE, DDL) return an empty
    /// vector.
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>>;

    /// Execute an INSERT and return the primary key the database assigned.
    async fn exec_returning_key(&self, sql: &str, args: &[Value]) -> Result<Value>;

    /// Report the columns of `table`, in table order.
    ///
    /// A table that does not exist yields an empty list; turning that into a
    /// schema error is the caller's concern.
    async fn discover_columns(&self, table: &str) -> Result<Vec<String>>;
}

#[async_trait]
impl<D: Driver + ?Sized> Driver for Box<D> {
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        (**self).exec(sql, args).await
    }

    async fn exec_returning_key(&self, sql: &str, args: &[Value]) -> Result<Value> {
        (**self).exec_returning_key(sql, args).await
    }

    async fn discover_columns(&self, table: &str) -> Result<Vec<String>> {
        (**self).discover_columns(table).await
    }
}
