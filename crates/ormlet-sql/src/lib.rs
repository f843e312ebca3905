//! SQL generation for ormlet.
//!
//! Statements are built as a small AST and rendered by [`Serializer`]. Table
//! and column names are written into the SQL text directly; they only ever
//! come from schema metadata and static declarations. Every value is replaced
//! by a positional `?` placeholder and pushed onto the parameter list, so no
//! value literal ever appears in generated SQL.

pub mod query;
pub use query::{
    delete_by_key, insert, join_select, select_all, select_by_key, select_by_predicates, update,
};

pub mod serializer;
pub use serializer::{Params, Serializer};

pub mod stmt;
pub use stmt::Statement;
