use super::{Expr, Ident, Statement};

#[derive(Debug, Clone)]
pub struct Update {
    /// TABLE to update
    pub table: Ident,

    /// Column assignments
    pub assignments: Vec<Assignment>,

    /// WHERE clause
    pub selection: Option<Expr>,
}

#[derive(Debug, Clone)]
pub struct Assignment {
    pub target: Ident,
    pub value: Expr,
}

impl From<Update> for Statement {
    fn from(value: Update) -> Self {
        Statement::Update(value)
    }
}
