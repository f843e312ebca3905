use std::fmt;

/// A table or column name.
///
/// Identifiers are rendered verbatim, so they must come from schema metadata
/// or static declarations, never from request data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ident(pub String);

impl From<&str> for Ident {
    fn from(value: &str) -> Self {
        Ident(value.into())
    }
}

impl From<String> for Ident {
    fn from(value: String) -> Self {
        Ident(value)
    }
}

impl From<&String> for Ident {
    fn from(value: &String) -> Self {
        Ident(value.clone())
    }
}

impl fmt::Display for Ident {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
