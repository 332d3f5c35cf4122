//! # pgcnm
//!
//! Typed column names for building PostgreSQL query fragments.
//!
//! ## Features
//!
//! - **Typed columns**: `Column<T>` ties a column name to the Rust type of its values,
//!   so `age.eq("x")` on a `Column<i32>` does not compile
//! - **Plain fragments**: operations return `(String, T)` tuples and strings that any
//!   builder accepting `?` placeholders can consume
//! - **Conjunctions**: `Qs` / `Qx` compose conditions with AND, OR and NOT
//! - **Scopes**: boxed builder transformers, applied in order
//! - **Derive**: `#[derive(Columns)]` generates a column set per struct
//!
//! ## Column DSL
//!
//! ```ignore
//! use pgcnm::prelude::*;
//!
//! #[derive(Columns)]
//! struct Example {
//!     name: String,
//!     rank: i32,
//! }
//!
//! let c = Example::columns();
//!
//! let rows = qb::select(ExampleColumns::TABLE)
//!     .and_where(c.name.eq("abc".to_string()))
//!     .and_where(Qx::from(c.rank.gt(10)).or([Qx::from(c.rank.is_null())]))
//!     .order(c.rank.desc())
//!     .fetch_all::<(String, i32)>(&client)
//!     .await?;
//! ```

pub mod clause;
pub mod client;
pub mod coalesce;
pub mod column;
pub mod condition;
pub mod conjunction;
pub mod error;
pub mod ident;
pub mod json;
mod macros;
pub mod ops;
pub mod order;
pub mod param;
pub mod prelude;
pub mod qb;
pub mod row;
pub mod scope;
pub mod select;
pub mod stmt;
pub mod table;
pub mod value_map;

pub use clause::{Assignment, ClauseColumn};
pub use client::GenericClient;
pub use coalesce::Coalesce;
pub use column::{cnm, column, Column};
pub use condition::IntoCondition;
pub use conjunction::{Qs, Qx};
pub use error::{CnmError, CnmResult};
pub use ident::Ident;
pub use json::{JsonColumn, JsonSource};
pub use order::OrderBy;
pub use param::{Param, ParamList};
pub use row::{FromRow, RowExt};
pub use scope::{scope, ScopeFn, Scoped};
pub use select::Sx;
pub use stmt::{StmtArgs, StmtArgsTuple};
pub use table::{JoinKind, TableColumn, TableJoin, TableName, TableRef};
pub use value_map::{SetValue, ValueMap};

// Re-export qb module for easy access
pub use qb::{DeleteQb, Expr, ExprGroup, MutationQb, SelectQb, SqlQb, UpdateQb, WhereQb};

#[cfg(feature = "derive")]
pub use pgcnm_derive::{Columns, FromRow};

// Re-exported for code generated by the derives
pub use tokio_postgres;
