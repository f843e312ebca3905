use heck::{ToSnakeCase, ToUpperCamelCase};

/// The naming collaborator: derives table, class and key names from model
/// and association names.
///
/// Names are split into lower-case words so they can be rendered in any case.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake
            .split('_')
            .filter(|part| !part.is_empty())
            .map(String::from)
            .collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    pub fn upper_camel_case(&self) -> String {
        self.snake_case().to_upper_camel_case()
    }

    /// Pluralizes the last word.
    pub fn plural(&self) -> Name {
        self.map_last(|word| pluralizer::pluralize(word, 2, false))
    }

    /// Singularizes the last word.
    pub fn singular(&self) -> Name {
        self.map_last(|word| pluralizer::pluralize(word, 1, false))
    }

    fn map_last(&self, f: impl FnOnce(&str) -> String) -> Name {
        let mut parts = self.parts.clone();
        if let Some(last) = parts.last_mut() {
            *last = f(last);
        }
        Name { parts }
    }

    /// Default table name for a model type: `HouseCat` -> `house_cats`.
    pub fn table_name(type_name: &str) -> String {
        Name::new(type_name).plural().snake_case()
    }

    /// Default class name for an association: `owners` -> `Owner`.
    pub fn class_name(association: &str) -> String {
        Name::new(association).singular().upper_camel_case()
    }

    /// Default foreign key column pointing at `name`: `Human` -> `human_id`.
    pub fn foreign_key(name: &str) -> String {
        format!("{}_id", Name::new(name).snake_case())
    }
}
