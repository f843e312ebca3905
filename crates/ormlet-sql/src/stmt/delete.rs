use super::{Expr, Ident, Statement};

#[derive(Debug, Clone)]
pub struct Delete {
    /// Table to delete from
    pub from: Ident,

    /// WHERE clause
    pub selection: Option<Expr>,
}

impl From<Delete> for Statement {
    fn from(value: Delete) -> Self {
        Statement::Delete(value)
    }
}
