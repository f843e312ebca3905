use super::{registry::Registered, Db};
use crate::Model;

use ormlet_core::{stmt::Row, Error, Result};
use ormlet_sql::{self as sql, stmt::Expr};

impl Db {
    /// Loads the target of the belongs-to association `name` declared on `S`.
    ///
    /// Returns `None` without querying when the foreign key is absent or
    /// `NULL`.
    pub async fn belongs_to<S: Model, T: Model>(
        &self,
        instance: &S,
        name: &str,
    ) -> Result<Option<T>> {
        let assoc = S::associations().get_belongs_to(name)?;
        tracing::trace!(
            model = S::NAME,
            association = name,
            target = %assoc.class_name,
            "belongs_to"
        );

        let target = self.resolve_target::<T>(&assoc.class_name, S::NAME, name)?;

        let Some(key) = instance.attributes().get_non_null(&assoc.foreign_key) else {
            return Ok(None);
        };

        let query = sql::select_by_key(
            &target.schema.table_name,
            assoc.target_key(target.ty.primary_key),
            key,
        );
        Ok(self.load::<T>(query).await?.into_iter().next())
    }

    /// Loads every target of the has-many association `name` declared on `S`.
    pub async fn has_many<S: Model, T: Model>(
        &self,
        instance: &S,
        name: &str,
    ) -> Result<Vec<T>> {
        let assoc = S::associations().get_has_many(name)?;
        tracing::trace!(
            model = S::NAME,
            association = name,
            target = %assoc.class_name,
            "has_many"
        );

        let target = self.resolve_target::<T>(&assoc.class_name, S::NAME, name)?;

        let Some(key) = instance.attributes().get_non_null(&assoc.primary_key) else {
            return Ok(vec![]);
        };

        let mut predicates = Row::new();
        predicates.insert(assoc.foreign_key.clone(), key.clone());

        self.load(sql::select_by_predicates(
            &target.schema.table_name,
            &predicates,
        ))
        .await
    }

    /// Loads the target of the has-one-through association `name` declared
    /// on `S`, joining the through target's table with the source target's
    /// table in one statement.
    pub async fn has_one_through<S: Model, T: Model>(
        &self,
        instance: &S,
        name: &str,
    ) -> Result<Option<T>> {
        let associations = S::associations();
        let assoc = associations.get_has_one_through(name)?;

        let through = associations.get_belongs_to(&assoc.through).map_err(|err| {
            err.context(format!(
                "`{}::{name}` goes through `{}`",
                S::NAME,
                assoc.through
            ))
        })?;
        let through_target = self
            .shared
            .models
            .resolve(&through.class_name)
            .map_err(|err| err.context(format!("cannot traverse `{}::{name}`", S::NAME)))?;

        let source = through_target
            .ty
            .associations()
            .get_belongs_to(&assoc.source)
            .map_err(|err| {
                err.context(format!(
                    "`{}::{name}` takes `{}` from `{}`",
                    S::NAME,
                    assoc.source,
                    through_target.ty.name
                ))
            })?;

        tracing::trace!(
            model = S::NAME,
            association = name,
            through = %through.class_name,
            target = %source.class_name,
            "has_one_through"
        );

        let target = self.resolve_target::<T>(&source.class_name, S::NAME, name)?;

        let Some(key) = instance.attributes().get_non_null(&through.foreign_key) else {
            return Ok(None);
        };

        let left = &through_target.schema.table_name;
        let right = &target.schema.table_name;

        let on = Expr::eq(
            Expr::qualified(left, &source.foreign_key),
            Expr::qualified(right, source.target_key(target.ty.primary_key)),
        );

        let filter_column = through.target_key(through_target.ty.primary_key);
        let query = sql::join_select(left, right, on, filter_column, key);
        Ok(self.load::<T>(query).await?.into_iter().next())
    }

    /// Looks up an association target by class name and checks it is `T`.
    fn resolve_target<T: Model>(
        &self,
        class_name: &str,
        owner: &str,
        association: &str,
    ) -> Result<Registered> {
        let target = self.shared.models.resolve(class_name).map_err(|err| {
            err.context(format!("cannot traverse `{owner}::{association}`"))
        })?;

        if !target.ty.is::<T>() {
            return Err(Error::configuration(format!(
                "`{owner}::{association}` refers to `{class_name}`, which is not `{}`",
                T::NAME
            )));
        }

        Ok(target)
    }
}
