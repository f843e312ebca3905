use super::{Expr, Ident, Statement, TableWithJoins};

#[derive(Debug, Clone)]
pub struct Select {
    /// What columns to include
    pub project: Projection,

    /// `FROM` part, includes joins
    pub from: TableWithJoins,

    /// WHERE
    pub selection: Option<Expr>,
}

#[derive(Debug, Clone)]
pub enum Projection {
    /// `{table}.*`
    Wildcard(Ident),
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Statement::Query(value)
    }
}
