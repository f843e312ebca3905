use super::Db;
use crate::Model;

use ormlet_core::{stmt::Value, Error, Result};
use ormlet_sql as sql;

impl Db {
    /// Inserts `instance` if its primary key is absent, updates it otherwise.
    pub async fn save<M: Model>(&self, instance: &mut M) -> Result<()> {
        if instance.attributes().get_non_null(M::PRIMARY_KEY).is_some() {
            self.update(instance).await
        } else {
            self.insert(instance).await
        }
    }

    /// Inserts every column of `M` and stores the generated key on `instance`.
    ///
    /// Columns with no value are written as `NULL`.
    pub async fn insert<M: Model>(&self, instance: &mut M) -> Result<()> {
        if instance.attributes().get_non_null(M::PRIMARY_KEY).is_some() {
            return Err(Error::precondition(format!(
                "cannot insert `{}` that already has a primary key",
                M::NAME
            )));
        }

        let schema = self.columns::<M>().await?;
        let values = column_values(instance, &schema.columns);

        let (sql, args) = sql::insert(&schema.table_name, &schema.columns[..], values);
        let key = self.driver().exec_returning_key(&sql, &args).await?;

        instance.attributes_mut().set(M::PRIMARY_KEY, key);
        Ok(())
    }

    /// Writes every column of `instance` to the row with its primary key.
    pub async fn update<M: Model>(&self, instance: &M) -> Result<()> {
        let key = self.require_key(instance, "update")?;
        let schema = self.columns::<M>().await?;
        let values = column_values(instance, &schema.columns);

        let (sql, args) = sql::update(
            &schema.table_name,
            &schema.columns[..],
            values,
            M::PRIMARY_KEY,
            key,
        );
        self.driver().exec(&sql, &args).await?;
        Ok(())
    }

    /// Deletes the row with `instance`'s primary key.
    pub async fn delete<M: Model>(&self, instance: M) -> Result<()> {
        let key = self.require_key(&instance, "delete")?;

        let (sql, args) = sql::delete_by_key(&self.table_name::<M>(), M::PRIMARY_KEY, key);
        self.driver().exec(&sql, &args).await?;
        Ok(())
    }

    fn require_key<M: Model>(&self, instance: &M, action: &str) -> Result<Value> {
        instance
            .attributes()
            .get_non_null(M::PRIMARY_KEY)
            .cloned()
            .ok_or_else(|| {
                Error::precondition(format!(
                    "cannot {action} `{}` without a primary key",
                    M::NAME
                ))
            })
    }
}

fn column_values<M: Model>(instance: &M, columns: &[String]) -> Vec<Value> {
    columns
        .iter()
        .map(|column| {
            instance
                .attributes()
                .get(column)
                .cloned()
                .unwrap_or_default()
        })
        .collect()
}
