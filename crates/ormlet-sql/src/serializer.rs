mod expr;

mod params;
pub use params::Params;

mod statement;

use crate::stmt::Statement;

use std::fmt;

/// Serialize a statement to a SQL string
#[derive(Debug, Default)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a, T> {
    /// Where to write the serialized SQL
    dst: &'a mut String,

    /// Where to store parameters
    params: &'a mut T,
}

impl Serializer {
    pub fn new() -> Serializer {
        Serializer::default()
    }

    /// Render `stmt`, pushing every value it contains onto `params` in the
    /// order its placeholder appears in the returned text.
    pub fn serialize(&self, stmt: &Statement, params: &mut impl Params) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            dst: &mut ret,
            params,
        };

        // Writing into a `String` cannot fail.
        let _ = fmt.statement(stmt);

        ret
    }
}

impl<T: Params> Formatter<'_, T> {
    fn statement(&mut self, statement: &Statement) -> fmt::Result {
        match statement {
            Statement::Delete(stmt) => self.delete(stmt),
            Statement::Insert(stmt) => self.insert(stmt),
            Statement::Query(stmt) => self.select(stmt),
            Statement::Update(stmt) => self.update(stmt),
        }
    }
}
