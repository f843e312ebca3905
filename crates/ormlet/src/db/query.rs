use super::Db;
use crate::{AttributeStore, Model, Result};

use ormlet_core::stmt::{Row, Value};
use ormlet_sql as sql;

impl Db {
    /// Every row of `M`'s table, in the order the database returns them.
    pub async fn all<M: Model>(&self) -> Result<Vec<M>> {
        self.load(sql::select_all(&self.table_name::<M>())).await
    }

    /// The instance whose primary key equals `key`.
    pub async fn find<M: Model>(&self, key: impl Into<Value>) -> Result<Option<M>> {
        let query = sql::select_by_key(&self.table_name::<M>(), M::PRIMARY_KEY, key);
        Ok(self.load::<M>(query).await?.into_iter().next())
    }

    /// The first instance whose `column` equals `value`.
    pub async fn find_by<M: Model>(
        &self,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<Option<M>> {
        let schema = self.columns::<M>().await?;
        schema.check_column(column)?;

        let query = sql::select_by_key(&schema.table_name, column, value);
        Ok(self.load::<M>(query).await?.into_iter().next())
    }

    /// All instances matching every `column = value` pair in `predicates`.
    ///
    /// An empty map matches every row.
    pub async fn filter<M: Model>(&self, predicates: Row) -> Result<Vec<M>> {
        let schema = self.columns::<M>().await?;

        for column in predicates.keys() {
            schema.check_column(column)?;
        }

        self.load(sql::select_by_predicates(&schema.table_name, &predicates))
            .await
    }

    /// Builds an unsaved instance from `params`.
    ///
    /// Every key must be a discovered column.
    pub async fn build<M: Model>(&self, params: Row) -> Result<M> {
        let schema = self.columns::<M>().await?;
        let mut attributes = AttributeStore::new();

        for (column, value) in params {
            schema.check_column(&column)?;
            attributes.set(column, value);
        }

        Ok(M::from_attributes(attributes))
    }

    /// Writes `value` into `instance` after checking `column` exists.
    pub async fn assign<M: Model>(
        &self,
        instance: &mut M,
        column: &str,
        value: impl Into<Value>,
    ) -> Result<()> {
        let schema = self.columns::<M>().await?;
        schema.check_column(column)?;

        instance.attributes_mut().set(column, value);
        Ok(())
    }
}
