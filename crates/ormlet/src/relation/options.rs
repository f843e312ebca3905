/// Optional overrides accepted by `belongs_to` and `has_many` declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub foreign_key: Option<String>,
    pub primary_key: Option<String>,
    pub class_name: Option<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreign_key(mut self, column: impl Into<String>) -> Self {
        self.foreign_key = Some(column.into());
        self
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = Some(column.into());
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }
}
