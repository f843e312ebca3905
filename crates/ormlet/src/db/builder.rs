use super::Db;
use crate::{schema::SchemaRegistry, Model, ModelType, Result};

use ormlet_core::driver::Driver;

#[derive(Debug, Default)]
pub struct Builder {
    /// Model types to finalize when the database is built.
    models: Vec<ModelType>,

    table_name_prefix: Option<String>,
}

impl Builder {
    pub fn register<T: Model>(&mut self) -> &mut Self {
        self.models.push(T::model_type());
        self
    }

    /// Set the prefix for inferred table names.
    ///
    /// Table names given with `#[table = "..."]` or
    /// [`Db::set_table_name`] are used as written.
    pub fn table_name_prefix(&mut self, prefix: &str) -> &mut Self {
        self.table_name_prefix = Some(prefix.to_string());
        self
    }

    /// Connects to the database at `url` with a built-in driver.
    ///
    /// Supported: `sqlite::memory:` and `sqlite:<path>`.
    #[cfg(feature = "sqlite")]
    pub async fn connect(&self, url: &str) -> Result<Db> {
        let driver = ormlet_driver_sqlite::Sqlite::new(url)?;
        self.build(driver).await
    }

    /// Builds a handle over `driver` and finalizes every registered model.
    pub async fn build(&self, driver: impl Driver) -> Result<Db> {
        let db = Db::new(
            Box::new(driver),
            SchemaRegistry::new(self.table_name_prefix.clone()),
        );

        for ty in &self.models {
            db.register_type(*ty).await?;
        }

        Ok(db)
    }
}
