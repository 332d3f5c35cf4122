//! DELETE query builder.

use crate::param::ParamList;
use crate::qb::expr::{Expr, ExprGroup};
use crate::qb::traits::{MutationQb, SqlQb, WhereQb};
use crate::scope::Scoped;

/// DELETE query builder.
///
/// Without conditions it renders `WHERE 1=0` and deletes nothing, unless
/// [`DeleteQb::allow_delete_all`] was set.
#[derive(Clone, Debug)]
pub struct DeleteQb {
    table: String,
    where_group: ExprGroup,
    returning_cols: Vec<String>,
    allow_delete_all: bool,
}

impl DeleteQb {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_group: ExprGroup::new(),
            returning_cols: Vec::new(),
            allow_delete_all: false,
        }
    }

    /// Permit an unconditional DELETE.
    pub fn allow_delete_all(mut self, allow: bool) -> Self {
        self.allow_delete_all = allow;
        self
    }

    pub fn returning(mut self, cols: impl Into<String>) -> Self {
        self.returning_cols = vec![cols.into()];
        self
    }

    fn build_delete(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        let mut sql = format!("DELETE FROM {}", self.table);

        let where_sql = self.where_group.build_into(&mut params);
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        } else if !self.allow_delete_all {
            sql.push_str(" WHERE 1=0");
        }

        if !self.returning_cols.is_empty() {
            sql.push_str(" RETURNING ");
            sql.push_str(&self.returning_cols.join(", "));
        }

        (sql, params)
    }
}

impl SqlQb for DeleteQb {
    const KIND: &'static str = "DELETE";

    fn build(&self) -> (String, ParamList) {
        self.build_delete()
    }

    fn check_placeholders(&self) -> crate::error::CnmResult<()> {
        self.where_group.check_placeholders()
    }
}

impl MutationQb for DeleteQb {}

impl WhereQb for DeleteQb {
    fn and_expr(mut self, expr: Expr) -> Self {
        self.where_group.and_expr(expr);
        self
    }
}

impl Scoped for DeleteQb {}
