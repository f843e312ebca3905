use super::Options;

use ormlet_core::schema::Name;

/// The owning type holds a foreign key pointing at the target's key.
#[derive(Debug, Clone, PartialEq)]
pub struct BelongsTo {
    pub name: String,

    /// Column on the owning type. Defaults to `{name}_id`.
    pub foreign_key: String,

    /// Column on the target type. `None` means the target's own primary key,
    /// known once the target is resolved.
    pub primary_key: Option<String>,

    /// Target type. Defaults to the singular, upper camel-cased name.
    pub class_name: String,
}

impl BelongsTo {
    pub fn new(name: &str, options: Options) -> Self {
        Self {
            name: name.to_string(),
            foreign_key: options
                .foreign_key
                .unwrap_or_else(|| Name::foreign_key(name)),
            primary_key: options.primary_key,
            class_name: options
                .class_name
                .unwrap_or_else(|| Name::class_name(name)),
        }
    }

    /// The referenced column, given the resolved target's primary key.
    pub fn target_key<'a>(&'a self, target_primary_key: &'a str) -> &'a str {
        self.primary_key.as_deref().unwrap_or(target_primary_key)
    }
}
