use super::{Formatter, Params};
use crate::stmt::{BinaryOp, Expr, ExprColumn};

use std::fmt::{self, Write};

impl<T: Params> Formatter<'_, T> {
    pub(super) fn expr(&mut self, expr: &Expr) -> fmt::Result {
        match expr {
            Expr::And(operands) => {
                let mut s = "";
                for operand in operands {
                    write!(self.dst, "{s}")?;
                    self.expr(operand)?;
                    s = " AND ";
                }
            }
            Expr::BinaryOp(expr) => {
                self.expr(&expr.lhs)?;
                write!(self.dst, " {} ", binary_op(expr.op))?;
                self.expr(&expr.rhs)?;
            }
            Expr::Column(column) => self.column(column)?,
            Expr::Value(value) => {
                self.params.push(value);
                write!(self.dst, "?")?;
            }
        }

        Ok(())
    }

    fn column(&mut self, column: &ExprColumn) -> fmt::Result {
        match &column.table {
            Some(table) => write!(self.dst, "{table}.{}", column.column),
            None => write!(self.dst, "{}", column.column),
        }
    }
}

fn binary_op(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::Eq => "=",
    }
}
