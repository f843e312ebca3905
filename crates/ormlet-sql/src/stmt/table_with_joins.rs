use super::{Expr, Ident};

#[derive(Debug, Clone)]
pub struct TableWithJoins {
    pub table: Ident,
    pub joins: Vec<Join>,
}

#[derive(Debug, Clone)]
pub struct Join {
    /// The joined table
    pub table: Ident,

    /// The `ON` constraint
    pub constraint: Expr,
}

impl TableWithJoins {
    pub fn table(table: impl Into<Ident>) -> Self {
        TableWithJoins {
            table: table.into(),
            joins: vec![],
        }
    }
}
