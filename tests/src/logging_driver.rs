use ormlet::{
    driver::{async_trait, Driver},
    stmt::{Row, Value},
    Result,
};
use std::sync::{Arc, Mutex};

/// A driver wrapper that logs all operations for testing purposes
#[derive(Debug)]
pub struct LoggingDriver {
    /// The underlying driver that actually executes operations
    inner: Box<dyn Driver>,

    /// Log of all operations executed through this driver
    ops_log: OpsLog,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DriverOp {
    Exec { sql: String, args: Vec<Value> },
    Insert { sql: String, args: Vec<Value> },
    DiscoverColumns { table: String },
}

impl DriverOp {
    /// SQL text of a statement, `None` for column discovery.
    pub fn sql(&self) -> Option<&str> {
        match self {
            DriverOp::Exec { sql, .. } | DriverOp::Insert { sql, .. } => Some(sql.as_str()),
            DriverOp::DiscoverColumns { .. } => None,
        }
    }

    pub fn args(&self) -> &[Value] {
        match self {
            DriverOp::Exec { args, .. } | DriverOp::Insert { args, .. } => args.as_slice(),
            DriverOp::DiscoverColumns { .. } => &[],
        }
    }
}

/// Shared handle to a [`LoggingDriver`]'s log.
#[derive(Debug, Clone, Default)]
pub struct OpsLog {
    ops: Arc<Mutex<Vec<DriverOp>>>,
}

impl OpsLog {
    fn push(&self, op: DriverOp) {
        self.ops.lock().expect("ops log lock poisoned").push(op);
    }

    pub fn len(&self) -> usize {
        self.ops.lock().expect("ops log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes and returns every logged operation.
    pub fn take(&self) -> Vec<DriverOp> {
        std::mem::take(&mut *self.ops.lock().expect("ops log lock poisoned"))
    }

    /// Removes and returns the logged statements, skipping column discovery.
    pub fn take_statements(&self) -> Vec<DriverOp> {
        self.take()
            .into_iter()
            .filter(|op| op.sql().is_some())
            .collect()
    }

    /// Tables columns were discovered for, in order, without clearing the log.
    pub fn discoveries(&self) -> Vec<String> {
        self.ops
            .lock()
            .expect("ops log lock poisoned")
            .iter()
            .filter_map(|op| match op {
                DriverOp::DiscoverColumns { table } => Some(table.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.take();
    }
}

impl LoggingDriver {
    pub fn new(driver: Box<dyn Driver>) -> Self {
        Self {
            inner: driver,
            ops_log: OpsLog::default(),
        }
    }

    /// Get a handle to access the operations log
    pub fn ops_log_handle(&self) -> OpsLog {
        self.ops_log.clone()
    }
}

#[async_trait]
impl Driver for LoggingDriver {
    async fn exec(&self, sql: &str, args: &[Value]) -> Result<Vec<Row>> {
        self.ops_log.push(DriverOp::Exec {
            sql: sql.to_string(),
            args: args.to_vec(),
        });
        self.inner.exec(sql, args).await
    }

    async fn exec_returning_key(&self, sql: &str, args: &[Value]) -> Result<Value> {
        self.ops_log.push(DriverOp::Insert {
            sql: sql.to_string(),
            args: args.to_vec(),
        });
        self.inner.exec_returning_key(sql, args).await
    }

    async fn discover_columns(&self, table: &str) -> Result<Vec<String>> {
        self.ops_log.push(DriverOp::DiscoverColumns {
            table: table.to_string(),
        });
        self.inner.discover_columns(table).await
    }
}
