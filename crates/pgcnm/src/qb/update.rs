//! UPDATE query builder.

use tokio_postgres::types::ToSql;

use crate::clause::Assignment;
use crate::param::{Param, ParamList};
use crate::qb::expr::{Expr, ExprGroup};
use crate::qb::traits::{MutationQb, SqlQb, WhereQb};
use crate::scope::Scoped;
use crate::value_map::{SetValue, ValueMap};

/// UPDATE query builder.
///
/// Assignments keep first-write order; assigning a column again replaces its value.
/// Building requires at least one assignment, and invalid identifiers passed through
/// [`UpdateQb::set_assignment`] surface as a validation error at execution time.
#[derive(Clone, Debug)]
pub struct UpdateQb {
    table: String,
    set_fields: ValueMap,
    where_group: ExprGroup,
    returning_cols: Vec<String>,
    build_error: Option<String>,
}

impl UpdateQb {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            set_fields: ValueMap::new(),
            where_group: ExprGroup::new(),
            returning_cols: Vec::new(),
            build_error: None,
        }
    }

    // ==================== SET ====================

    /// `column = $n`
    pub fn set<T: ToSql + Send + Sync + 'static>(mut self, column: impl Into<String>, value: T) -> Self {
        self.set_fields.insert(column, SetValue::Value(Param::new(value)));
        self
    }

    /// `column = expr`, e.g. from [`Column::expr_add`](crate::Column::expr_add).
    pub fn set_expr(mut self, column: impl Into<String>, expr: Expr) -> Self {
        self.set_fields.insert(column, SetValue::Expr(expr));
        self
    }

    /// `column = <raw sql>`
    pub fn set_raw(self, column: impl Into<String>, sql: impl Into<String>) -> Self {
        self.set_expr(column, Expr::raw(sql))
    }

    /// Apply every entry of a [`ValueMap`].
    pub fn update_columns(mut self, map: ValueMap) -> Self {
        for (column, value) in map {
            self.set_fields.insert(column, value);
        }
        self
    }

    /// Apply a structured assignment; the column is rendered as a quoted identifier.
    pub fn set_assignment(mut self, assignment: Assignment) -> Self {
        match assignment.column.target_sql() {
            Ok(target) => self.set_fields.insert(target, SetValue::Value(assignment.value)),
            Err(e) => {
                if self.build_error.is_none() {
                    self.build_error = Some(e.to_string());
                }
            }
        }
        self
    }

    // ==================== RETURNING ====================

    pub fn returning(mut self, cols: impl Into<String>) -> Self {
        self.returning_cols = vec![cols.into()];
        self
    }

    // ==================== Build ====================

    fn build_update(&self) -> (String, ParamList) {
        let mut params = ParamList::new();

        let set_parts: Vec<String> = self
            .set_fields
            .iter()
            .map(|(col, value)| match value {
                SetValue::Value(param) => {
                    let idx = params.push_param(param.clone());
                    format!("{col} = ${idx}")
                }
                SetValue::Expr(expr) => format!("{col} = {}", expr.build(&mut params)),
            })
            .collect();

        let mut sql = format!("UPDATE {} SET {}", self.table, set_parts.join(", "));

        let where_sql = self.where_group.build_into(&mut params);
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        if !self.returning_cols.is_empty() {
            sql.push_str(" RETURNING ");
            sql.push_str(&self.returning_cols.join(", "));
        }

        (sql, params)
    }
}

impl SqlQb for UpdateQb {
    const KIND: &'static str = "UPDATE";

    fn build(&self) -> (String, ParamList) {
        self.build_update()
    }

    fn build_error(&self) -> Option<&str> {
        self.build_error.as_deref()
    }

    fn validate(&self) -> crate::error::CnmResult<()> {
        if let Some(msg) = &self.build_error {
            return Err(crate::CnmError::validation(msg.clone()));
        }
        if self.set_fields.is_empty() {
            return Err(crate::CnmError::validation(
                "UpdateQb: SET clause cannot be empty",
            ));
        }
        self.check_placeholders()
    }

    fn check_placeholders(&self) -> crate::error::CnmResult<()> {
        for (_, value) in self.set_fields.iter() {
            if let SetValue::Expr(expr) = value {
                expr.check_placeholders()?;
            }
        }
        self.where_group.check_placeholders()
    }
}

impl MutationQb for UpdateQb {}

impl WhereQb for UpdateQb {
    fn and_expr(mut self, expr: Expr) -> Self {
        self.where_group.and_expr(expr);
        self
    }
}

impl Scoped for UpdateQb {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    #[test]
    fn value_and_expression_assignments_share_numbering() {
        let price: Column<i64> = Column::new("price");
        let name: Column<String> = Column::new("name");
        let id: Column<i64> = Column::new("id");
        let (sql, params) = UpdateQb::new("products")
            .update_columns(name.kw("pen".to_string()).ke(price.ke_add(5)))
            .and_where(id.eq(9))
            .build();
        assert_eq!(sql, "UPDATE products SET name = $1, price = price + $2 WHERE id=$3");
        assert_eq!(params.len(), 3);
    }

    #[test]
    fn replace_expression_binds_two_values() {
        let title: Column<String> = Column::new("title");
        let (sql, params) = UpdateQb::new("posts")
            .set_expr("title", title.expr_replace("a".to_string(), "b".to_string()))
            .returning("id")
            .build();
        assert_eq!(sql, "UPDATE posts SET title = REPLACE(title, $1, $2) RETURNING id");
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn assignment_renders_quoted_target() {
        let age: Column<i32> = Column::new("age");
        let sql = UpdateQb::new("users")
            .set_assignment(age.clause().assignment(30))
            .to_sql();
        assert_eq!(sql, r#"UPDATE users SET "age" = $1"#);
    }

    #[test]
    fn invalid_assignment_is_reported_by_validate() {
        let bad: Column<i32> = Column::new("");
        let qb = UpdateQb::new("users").set("a", 1i32).set_assignment(bad.clause().assignment(1));
        assert!(qb.build_error().is_some());
        assert!(matches!(qb.validate(), Err(crate::CnmError::Validation(_))));
    }

    #[test]
    fn expression_with_too_few_values_fails_validation() {
        let qb = UpdateQb::new("users")
            .set_expr("score", Expr::template("score + ? * ?", vec![Param::new(1i32)]));
        assert!(matches!(
            qb.validate(),
            Err(crate::CnmError::ArgCount { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn empty_set_fails_validation() {
        assert!(UpdateQb::new("users").validate().is_err());
    }
}
