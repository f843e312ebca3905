pub use ormlet_core::{async_trait, driver::Driver};

#[cfg(feature = "sqlite")]
pub use ormlet_driver_sqlite::Sqlite;
