mod value;
use value::Value;

use ormlet_core::{
    async_trait,
    driver::Driver,
    stmt::{self, Row},
    Error, Result,
};
use rusqlite::Connection as RusqliteConnection;
use std::{
    path::Path,
    sync::{Mutex, MutexGuard, PoisonError},
};
use url::Url;

/// SQLite implementation of the data-access collaborator.
///
/// Holds a single connection. Every call runs one statement to completion
/// while holding the connection lock, so statements from concurrent callers
/// are serialized.
#[derive(Debug)]
pub struct Sqlite {
    connection: Mutex<RusqliteConnection>,
}

impl Sqlite {
    /// Create a new SQLite driver from a connection URL.
    ///
    /// Accepts `sqlite::memory:` for an in-memory database and
    /// `sqlite:<path>` for a database file.
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let url_str = url.into();
        let url = Url::parse(&url_str).map_err(Error::driver)?;

        if url.scheme() != "sqlite" {
            return Err(Error::configuration(format!(
                "connection URL does not have a `sqlite` scheme; url={url_str}"
            )));
        }

        if url.path() == ":memory:" {
            Self::in_memory()
        } else {
            Self::open(url.path())
        }
    }

    /// Create an in-memory SQLite database
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory().map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    /// Open a SQLite database at the specified file path
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path).map_err(Error::driver)?;
        Ok(Self::from_connection(connection))
    }

    fn from_connection(connection: RusqliteConnection) -> Self {
        Self {
            connection: Mutex::new(connection),
        }
    }

    fn connection(&self) -> MutexGuard<'_, RusqliteConnection> {
        // Poisoning only means another caller panicked; the connection is intact.
        self.connection
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Driver for Sqlite {
    async fn exec(&self, sql: &str, args: &[stmt::Value]) -> Result<Vec<Row>> {
        tracing::debug!(sql, args = args.len(), "sqlite exec");

        let connection = self.connection();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;

        let columns: Vec<String> = stmt
            .column_names()
            .into_iter()
            .map(String::from)
            .collect();

        let mut rows = stmt
            .query(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::driver)?;

        let mut ret = vec![];

        while let Some(row) = rows.next().map_err(Error::driver)? {
            let mut record = Row::with_capacity(columns.len());

            for (index, column) in columns.iter().enumerate() {
                let value = value::from_sql(row, index).map_err(Error::driver)?;
                record.insert(column.clone(), value);
            }

            ret.push(record);
        }

        Ok(ret)
    }

    async fn exec_returning_key(&self, sql: &str, args: &[stmt::Value]) -> Result<stmt::Value> {
        tracing::debug!(sql, args = args.len(), "sqlite insert");

        let connection = self.connection();
        let mut stmt = connection.prepare_cached(sql).map_err(Error::driver)?;

        stmt.execute(rusqlite::params_from_iter(args.iter().map(Value::from)))
            .map_err(Error::driver)?;

        Ok(stmt::Value::I64(connection.last_insert_rowid()))
    }

    async fn discover_columns(&self, table: &str) -> Result<Vec<String>> {
        let connection = self.connection();
        let mut stmt = connection
            .prepare_cached("SELECT name FROM pragma_table_info(?1) ORDER BY cid")
            .map_err(Error::driver)?;

        let columns = stmt
            .query_map([table], |row| row.get::<_, String>(0))
            .map_err(Error::driver)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(Error::driver)?;

        tracing::debug!(table, columns = ?columns, "discovered columns");

        Ok(columns)
    }
}
