/// Reaches a single target through two belongs-to hops.
///
/// `through` names a belongs-to declared on the owning type; `source` names a
/// belongs-to declared on that association's target. Both are resolved at
/// traversal time.
#[derive(Debug, Clone, PartialEq)]
pub struct HasOneThrough {
    pub name: String,
    pub through: String,
    pub source: String,
}

impl HasOneThrough {
    pub fn new(name: &str, through: &str, source: &str) -> Self {
        Self {
            name: name.to_string(),
            through: through.to_string(),
            source: source.to_string(),
        }
    }
}
