use crate::{relation::Associations, AttributeStore};

use std::any::TypeId;

/// A type backed by one database table.
///
/// Implemented by `#[derive(Model)]`. The derived implementation carries the
/// declaration-time metadata as associated constants; everything discovered
/// from the database lives in the [`SchemaRegistry`](crate::SchemaRegistry).
pub trait Model: Sized + Send + Sync + 'static {
    /// Class name, used to look the type up from association declarations.
    const NAME: &'static str;

    /// Table name given at declaration time, if any.
    const TABLE_NAME: Option<&'static str> = None;

    const PRIMARY_KEY: &'static str = "id";

    /// Columns with typed accessors. Checked against the discovered columns
    /// when the type is registered.
    const ACCESSORS: &'static [&'static str] = &[];

    fn from_attributes(attributes: AttributeStore) -> Self;

    fn attributes(&self) -> &AttributeStore;

    fn attributes_mut(&mut self) -> &mut AttributeStore;

    /// Records the type's association declarations.
    fn declare(associations: &mut Associations) {
        let _ = associations;
    }

    /// This type's association registry, populated from [`declare`](Self::declare)
    /// on first access.
    fn associations() -> &'static Associations;

    fn model_type() -> ModelType {
        ModelType {
            type_id: TypeId::of::<Self>(),
            name: Self::NAME,
            table_name: Self::TABLE_NAME,
            primary_key: Self::PRIMARY_KEY,
            accessors: Self::ACCESSORS,
            associations: Self::associations,
        }
    }
}

/// Type-erased handle to a [`Model`] implementation.
#[derive(Debug, Clone, Copy)]
pub struct ModelType {
    pub(crate) type_id: TypeId,
    pub name: &'static str,
    pub table_name: Option<&'static str>,
    pub primary_key: &'static str,
    pub accessors: &'static [&'static str],
    associations: fn() -> &'static Associations,
}

impl ModelType {
    pub fn of<M: Model>() -> ModelType {
        M::model_type()
    }

    pub fn associations(&self) -> &'static Associations {
        (self.associations)()
    }

    pub fn is<M: Model>(&self) -> bool {
        self.type_id == TypeId::of::<M>()
    }
}

impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for ModelType {}
