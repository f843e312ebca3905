mod belongs_to;
pub use belongs_to::BelongsTo;

mod has_many;
pub use has_many::HasMany;

mod has_one_through;
pub use has_one_through::HasOneThrough;

mod options;
pub use options::Options;

use ormlet_core::{Error, Result};

use indexmap::IndexMap;

/// A declared association.
#[derive(Debug, Clone, PartialEq)]
pub enum Association {
    BelongsTo(BelongsTo),
    HasMany(HasMany),
    HasOneThrough(HasOneThrough),
}

impl Association {
    pub fn name(&self) -> &str {
        match self {
            Association::BelongsTo(assoc) => &assoc.name,
            Association::HasMany(assoc) => &assoc.name,
            Association::HasOneThrough(assoc) => &assoc.name,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Association::BelongsTo(_) => "belongs_to",
            Association::HasMany(_) => "has_many",
            Association::HasOneThrough(_) => "has_one_through",
        }
    }
}

/// Per-type registry of association declarations, keyed by association name.
///
/// Declaring a name twice replaces the earlier declaration.
#[derive(Debug)]
pub struct Associations {
    owner: &'static str,
    primary_key: &'static str,
    by_name: IndexMap<String, Association>,
}

impl Associations {
    pub fn new(owner: &'static str, primary_key: &'static str) -> Self {
        Self {
            owner,
            primary_key,
            by_name: IndexMap::new(),
        }
    }

    pub fn belongs_to(&mut self, name: &str, options: Options) -> &mut Self {
        self.insert(Association::BelongsTo(BelongsTo::new(name, options)))
    }

    pub fn has_many(&mut self, name: &str, options: Options) -> &mut Self {
        self.insert(Association::HasMany(HasMany::new(
            name,
            self.owner,
            self.primary_key,
            options,
        )))
    }

    pub fn has_one_through(&mut self, name: &str, through: &str, source: &str) -> &mut Self {
        self.insert(Association::HasOneThrough(HasOneThrough::new(
            name, through, source,
        )))
    }

    fn insert(&mut self, association: Association) -> &mut Self {
        self.by_name
            .insert(association.name().to_string(), association);
        self
    }

    pub fn get(&self, name: &str) -> Result<&Association> {
        self.by_name.get(name).ok_or_else(|| {
            Error::configuration(format!(
                "`{}` has no association named `{name}`",
                self.owner
            ))
        })
    }

    pub fn get_belongs_to(&self, name: &str) -> Result<&BelongsTo> {
        match self.get(name)? {
            Association::BelongsTo(assoc) => Ok(assoc),
            other => Err(self.wrong_kind(other, "belongs_to")),
        }
    }

    pub fn get_has_many(&self, name: &str) -> Result<&HasMany> {
        match self.get(name)? {
            Association::HasMany(assoc) => Ok(assoc),
            other => Err(self.wrong_kind(other, "has_many")),
        }
    }

    pub fn get_has_one_through(&self, name: &str) -> Result<&HasOneThrough> {
        match self.get(name)? {
            Association::HasOneThrough(assoc) => Ok(assoc),
            other => Err(self.wrong_kind(other, "has_one_through")),
        }
    }

    fn wrong_kind(&self, association: &Association, expected: &str) -> Error {
        Error::configuration(format!(
            "`{}::{}` is declared as {}, not {expected}",
            self.owner,
            association.name(),
            association.kind(),
        ))
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}
