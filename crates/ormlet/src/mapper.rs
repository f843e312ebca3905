use crate::{AttributeStore, Model};

use ormlet_core::stmt::Row;

/// Turns result rows into model instances.
#[derive(Debug)]
pub struct RecordMapper;

impl RecordMapper {
    /// Builds an instance and writes every entry of `row` into its
    /// attributes. Column names are trusted; nothing is validated.
    pub fn hydrate<M: Model>(row: Row) -> M {
        let mut attributes = AttributeStore::new();

        for (column, value) in row {
            attributes.set(column, value);
        }

        M::from_attributes(attributes)
    }

    /// Hydrates each row in order.
    pub fn hydrate_all<M: Model>(rows: Vec<Row>) -> Vec<M> {
        rows.into_iter().map(Self::hydrate::<M>).collect()
    }
}
