//! Host query builders that consume column fragments.
//!
//! The builders accept the output of [`Column`](crate::Column) operations directly and
//! renumber every `?` placeholder to `$n` when the statement is built.
//!
//! # Usage
//!
//! ```ignore
//! use pgcnm::prelude::*;
//!
//! let name: Column<String> = Column::new("name");
//! let rank: Column<i32> = Column::new("rank");
//!
//! // SELECT
//! let rows = qb::select("examples")
//!     .and_where(name.eq("abc".to_string()))
//!     .and_where(rank.gt(100))
//!     .order(rank.desc())
//!     .query(&client)
//!     .await?;
//!
//! // UPDATE
//! qb::update("examples")
//!     .update_columns(rank.kw(1).ke(name.ke_concat("!".to_string())))
//!     .and_where(name.eq("abc".to_string()))
//!     .execute(&client)
//!     .await?;
//!
//! // DELETE
//! qb::delete("examples")
//!     .and_where(rank.lt(0))
//!     .execute(&client)
//!     .await?;
//! ```

mod delete;
mod expr;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use expr::{Expr, ExprGroup};
pub use select::SelectQb;
pub use traits::{MutationQb, SqlQb, WhereQb};
pub use update::UpdateQb;

/// Create a SELECT query builder for a table or FROM expression.
pub fn select(from_expr: impl Into<String>) -> SelectQb {
    SelectQb::new(from_expr)
}

/// Create an UPDATE query builder for the given table.
pub fn update(table: impl Into<String>) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE query builder for the given table.
///
/// # Safety
/// By default, DELETE without WHERE conditions will generate `WHERE 1=0` (no-op).
/// Use `allow_delete_all(true)` to allow deleting all rows.
pub fn delete(table: impl Into<String>) -> DeleteQb {
    DeleteQb::new(table)
}
