use super::{Formatter, Params};
use crate::stmt::{Delete, Insert, Projection, Select, Update};

use std::fmt::{self, Write};

impl<T: Params> Formatter<'_, T> {
    pub(super) fn select(&mut self, select: &Select) -> fmt::Result {
        write!(self.dst, "SELECT ")?;

        match &select.project {
            Projection::Wildcard(table) => write!(self.dst, "{table}.*")?,
        }

        write!(self.dst, " FROM {}", select.from.table)?;

        for join in &select.from.joins {
            write!(self.dst, " JOIN {} ON ", join.table)?;
            self.expr(&join.constraint)?;
        }

        if let Some(selection) = &select.selection {
            write!(self.dst, " WHERE ")?;
            self.expr(selection)?;
        }

        Ok(())
    }

    pub(super) fn insert(&mut self, stmt: &Insert) -> fmt::Result {
        assert_eq!(
            stmt.columns.len(),
            stmt.values.len(),
            "INSERT column and value counts differ"
        );

        write!(self.dst, "INSERT INTO {} (", stmt.table)?;

        let mut s = "";
        for column in &stmt.columns {
            write!(self.dst, "{s}{column}")?;
            s = ", ";
        }

        write!(self.dst, ") VALUES (")?;

        let mut s = "";
        for value in &stmt.values {
            write!(self.dst, "{s}")?;
            self.expr(value)?;
            s = ", ";
        }

        write!(self.dst, ")")
    }

    pub(super) fn update(&mut self, update: &Update) -> fmt::Result {
        write!(self.dst, "UPDATE {} SET ", update.table)?;

        let mut s = "";
        for assignment in &update.assignments {
            write!(self.dst, "{s}{} = ", assignment.target)?;
            self.expr(&assignment.value)?;
            s = ", ";
        }

        if let Some(selection) = &update.selection {
            write!(self.dst, " WHERE ")?;
            self.expr(selection)?;
        }

        Ok(())
    }

    pub(super) fn delete(&mut self, delete: &Delete) -> fmt::Result {
        write!(self.dst, "DELETE FROM {}", delete.from)?;

        if let Some(selection) = &delete.selection {
            write!(self.dst, " WHERE ")?;
            self.expr(selection)?;
        }

        Ok(())
    }
}
