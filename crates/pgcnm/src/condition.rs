//! Conversions from column fragments into WHERE conditions.
//!
//! [`IntoCondition`] is what lets a builder's `and_where` take the output of a
//! [`Column`](crate::Column) operation directly:
//!
//! ```ignore
//! use pgcnm::prelude::*;
//!
//! let name: Column<String> = Column::new("name");
//! let age: Column<i32> = Column::new("age");
//! let qb = select("users")
//!     .and_where(name.eq("alice".to_string()))
//!     .and_where(age.between(18, 30))
//!     .and_where(name.is_not_null());
//! ```

use tokio_postgres::types::ToSql;

use crate::conjunction::{Qs, Qx};
use crate::param::Param;
use crate::qb::Expr;
use crate::stmt::StmtArgs;

/// Anything usable as a WHERE condition.
pub trait IntoCondition {
    fn into_expr(self) -> Expr;
}

impl IntoCondition for Expr {
    fn into_expr(self) -> Expr {
        self
    }
}

impl IntoCondition for String {
    fn into_expr(self) -> Expr {
        Expr::Raw(self)
    }
}

impl IntoCondition for &str {
    fn into_expr(self) -> Expr {
        Expr::Raw(self.to_string())
    }
}

impl<T: ToSql + Send + Sync + 'static> IntoCondition for (String, T) {
    fn into_expr(self) -> Expr {
        Expr::template(self.0, vec![Param::new(self.1)])
    }
}

impl<T: ToSql + Send + Sync + 'static> IntoCondition for (&str, T) {
    fn into_expr(self) -> Expr {
        Expr::template(self.0, vec![Param::new(self.1)])
    }
}

impl<T: ToSql + Send + Sync + 'static> IntoCondition for (String, T, T) {
    fn into_expr(self) -> Expr {
        Expr::template(self.0, vec![Param::new(self.1), Param::new(self.2)])
    }
}

impl IntoCondition for Qs {
    fn into_expr(self) -> Expr {
        Expr::Raw(self.into_string())
    }
}

impl IntoCondition for &Qs {
    fn into_expr(self) -> Expr {
        Expr::Raw(self.qs().to_string())
    }
}

impl IntoCondition for StmtArgs {
    fn into_expr(self) -> Expr {
        let (stmt, args) = self.into_parts();
        Expr::template(stmt, args)
    }
}

impl IntoCondition for Qx {
    fn into_expr(self) -> Expr {
        self.into_stmt_args().into_expr()
    }
}

impl IntoCondition for &Qx {
    fn into_expr(self) -> Expr {
        self.clone().into_expr()
    }
}
