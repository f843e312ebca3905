use super::Options;

use ormlet_core::schema::Name;

/// The target type holds a foreign key pointing at the owning type's key.
#[derive(Debug, Clone, PartialEq)]
pub struct HasMany {
    pub name: String,

    /// Column on the target type. Defaults to `{owner}_id`, using the owning
    /// type's snake-cased name.
    pub foreign_key: String,

    /// Column on the owning type. Defaults to the owning type's primary key.
    pub primary_key: String,

    pub class_name: String,
}

impl HasMany {
    pub fn new(name: &str, owner: &str, owner_primary_key: &str, options: Options) -> Self {
        Self {
            name: name.to_string(),
            foreign_key: options
                .foreign_key
                .unwrap_or_else(|| Name::foreign_key(owner)),
            primary_key: options
                .primary_key
                .unwrap_or_else(|| owner_primary_key.to_string()),
            class_name: options
                .class_name
                .unwrap_or_else(|| Name::class_name(name)),
        }
    }
}
