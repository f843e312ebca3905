//! A small active-record layer over SQL databases.
//!
//! Models are plain structs holding an [`AttributeStore`]. Their columns are
//! discovered from the live table the first time the type is used, their
//! associations are declared with attributes on the struct, and every
//! statement is issued through a [`Db`] handle.

mod attributes;
pub use attributes::AttributeStore;

pub mod db;
pub use db::Db;

pub mod driver;

mod mapper;
pub use mapper::RecordMapper;

mod model;
pub use model::{Model, ModelType};

pub mod relation;
pub use relation::{Association, Associations, BelongsTo, HasMany, HasOneThrough, Options};

pub mod schema;
pub use schema::{ModelSchema, SchemaRegistry};

pub use ormlet_core::{row, stmt, Error, Result};
pub use ormlet_macros::Model;

#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        relation::{Associations, Options},
        stmt::{Row, Value},
        AttributeStore, Db, Model, Result,
    };
    pub use std::{option::Option, sync::OnceLock, vec::Vec};
}
