use super::Ident;

use ormlet_core::stmt::Value;

#[derive(Debug, Clone)]
pub enum Expr {
    /// AND a set of expressions
    And(Vec<Expr>),

    /// Binary operation
    BinaryOp(ExprBinaryOp),

    /// A column reference, optionally qualified by its table
    Column(ExprColumn),

    /// A value. Always serialized as a placeholder.
    Value(Value),
}

#[derive(Debug, Clone)]
pub struct ExprBinaryOp {
    pub lhs: Box<Expr>,
    pub op: BinaryOp,
    pub rhs: Box<Expr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Eq,
}

#[derive(Debug, Clone)]
pub struct ExprColumn {
    pub table: Option<Ident>,
    pub column: Ident,
}

impl Expr {
    /// An unqualified column reference.
    pub fn column(column: impl Into<Ident>) -> Expr {
        Expr::Column(ExprColumn {
            table: None,
            column: column.into(),
        })
    }

    /// A `table.column` reference.
    pub fn qualified(table: impl Into<Ident>, column: impl Into<Ident>) -> Expr {
        Expr::Column(ExprColumn {
            table: Some(table.into()),
            column: column.into(),
        })
    }

    pub fn value(value: impl Into<Value>) -> Expr {
        Expr::Value(value.into())
    }

    pub fn eq(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
        Expr::BinaryOp(ExprBinaryOp {
            lhs: Box::new(lhs.into()),
            op: BinaryOp::Eq,
            rhs: Box::new(rhs.into()),
        })
    }

    /// Combine expressions with AND. A single operand is returned unwrapped;
    /// no operands yields `None`.
    pub fn and_from_vec(mut operands: Vec<Expr>) -> Option<Expr> {
        match operands.len() {
            0 => None,
            1 => operands.pop(),
            _ => Some(Expr::And(operands)),
        }
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Expr::Value(value)
    }
}

impl From<ExprColumn> for Expr {
    fn from(value: ExprColumn) -> Self {
        Expr::Column(value)
    }
}
