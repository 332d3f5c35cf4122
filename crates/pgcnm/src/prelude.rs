//! Convenient imports for typical `pgcnm` usage.
//!
//! ```ignore
//! use pgcnm::prelude::*;
//! ```

pub use crate::qb;
pub use crate::{
    CnmError, CnmResult, Column, FromRow, GenericClient, MutationQb, OrderBy, Qs, Qx, RowExt,
    ScopeFn, Scoped, SqlQb, StmtArgsTuple, Sx, TableJoin, TableName, ValueMap, WhereQb,
};
pub use crate::{qx, sx};

#[cfg(feature = "derive")]
pub use crate::Columns;
