mod delete;
pub use delete::Delete;

mod expr;
pub use expr::{BinaryOp, Expr, ExprBinaryOp, ExprColumn};

mod ident;
pub use ident::Ident;

mod insert;
pub use insert::Insert;

mod select;
pub use select::{Projection, Select};

mod table_with_joins;
pub use table_with_joins::{Join, TableWithJoins};

mod update;
pub use update::{Assignment, Update};

#[derive(Debug, Clone)]
pub enum Statement {
    Delete(Delete),
    Insert(Insert),
    Query(Select),
    Update(Update),
}
