use super::{Expr, Ident, Statement};

#[derive(Debug, Clone)]
pub struct Insert {
    /// The table to insert into
    pub table: Ident,

    /// Columns to insert into
    pub columns: Vec<Ident>,

    /// One expression per column, in column order
    pub values: Vec<Expr>,
}

impl From<Insert> for Statement {
    fn from(value: Insert) -> Self {
        Statement::Insert(value)
    }
}
