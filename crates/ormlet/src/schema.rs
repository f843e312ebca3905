use crate::ModelType;

use ormlet_core::{driver::Driver, schema::Name, Error, Result};

use std::{
    any::TypeId,
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, RwLock},
};
use tokio::sync::OnceCell;

/// Columns discovered for one model type.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelSchema {
    pub name: &'static str,
    pub table_name: String,
    pub primary_key: &'static str,

    /// Column names in table order.
    pub columns: Vec<String>,
}

impl ModelSchema {
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Fails with an unknown-attribute error unless `column` was discovered.
    pub fn check_column(&self, column: &str) -> Result<()> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(Error::unknown_attribute(self.name, column))
        }
    }
}

/// Resolves table names and caches discovered columns per model type.
///
/// Discovery runs at most once per type. Concurrent first calls wait on the
/// same in-flight discovery; a failed discovery is not cached.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    /// Prepended to inferred table names.
    table_name_prefix: Option<String>,

    /// Table names set at runtime, which win over declared ones.
    table_names: RwLock<HashMap<TypeId, String>>,

    entries: Mutex<HashMap<TypeId, Arc<OnceCell<Arc<ModelSchema>>>>>,
}

impl SchemaRegistry {
    pub fn new(table_name_prefix: Option<String>) -> Self {
        Self {
            table_name_prefix,
            ..Self::default()
        }
    }

    /// Overrides the table name for `ty`.
    ///
    /// Has no effect once columns have been discovered for the type.
    pub fn set_table_name(&self, ty: &ModelType, table_name: impl Into<String>) {
        if self.cached(ty).is_some() {
            return;
        }

        self.table_names
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(ty.type_id, table_name.into());
    }

    /// The table name `ty` is (or will be) bound to.
    pub fn table_name_for(&self, ty: &ModelType) -> String {
        match self.cached(ty) {
            Some(schema) => schema.table_name.clone(),
            None => self.resolve_table_name(ty),
        }
    }

    fn resolve_table_name(&self, ty: &ModelType) -> String {
        let table_names = self
            .table_names
            .read()
            .unwrap_or_else(PoisonError::into_inner);

        if let Some(table_name) = table_names.get(&ty.type_id) {
            return table_name.clone();
        }

        if let Some(table_name) = ty.table_name {
            return table_name.to_string();
        }

        let inferred = Name::table_name(ty.name);
        match &self.table_name_prefix {
            Some(prefix) => format!("{prefix}{inferred}"),
            None => inferred,
        }
    }

    /// Discovered columns for `ty`, if discovery has completed.
    pub fn cached(&self, ty: &ModelType) -> Option<Arc<ModelSchema>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&ty.type_id)
            .and_then(|cell| cell.get())
            .cloned()
    }

    /// Returns the columns for `ty`, discovering them on first use.
    ///
    /// A table with no columns is treated as missing.
    pub async fn columns_for(
        &self,
        ty: &ModelType,
        driver: &dyn Driver,
    ) -> Result<Arc<ModelSchema>> {
        let cell = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(ty.type_id)
            .or_default()
            .clone();

        let schema = cell
            .get_or_try_init(|| async move {
                let table_name = self.resolve_table_name(ty);
                let columns = driver.discover_columns(&table_name).await?;

                if columns.is_empty() {
                    return Err(Error::schema(format!(
                        "table `{table_name}` for model `{}` does not exist",
                        ty.name
                    )));
                }

                tracing::debug!(
                    model = ty.name,
                    table = %table_name,
                    ?columns,
                    "bound model to table"
                );

                Ok(Arc::new(ModelSchema {
                    name: ty.name,
                    table_name,
                    primary_key: ty.primary_key,
                    columns,
                }))
            })
            .await?;

        Ok(schema.clone())
    }
}
