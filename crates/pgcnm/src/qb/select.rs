//! SELECT query builder.

use crate::client::GenericClient;
use crate::error::CnmResult;
use crate::order::OrderBy;
use crate::param::ParamList;
use crate::qb::expr::{Expr, ExprGroup};
use crate::qb::traits::{trace_statement, SqlQb, WhereQb};
use crate::scope::Scoped;
use crate::select::Sx;

/// SELECT query builder.
///
/// The select list may carry bind values (from [`Sx`]); they are numbered before
/// the WHERE values because they come first in the statement.
#[derive(Clone, Debug)]
pub struct SelectQb {
    /// Table or FROM expression
    from_expr: String,
    /// Select list; `*` when unset
    select_list: Option<Expr>,
    /// JOIN clauses
    join_clauses: Vec<String>,
    /// WHERE conditions
    where_group: ExprGroup,
    /// GROUP BY clause
    group_by: Option<String>,
    /// HAVING conditions
    having_group: ExprGroup,
    /// ORDER BY items
    order_clauses: Vec<String>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl SelectQb {
    /// Create a new SELECT query builder for a table or FROM expression.
    pub fn new(from_expr: impl Into<String>) -> Self {
        Self {
            from_expr: from_expr.into(),
            select_list: None,
            join_clauses: Vec::new(),
            where_group: ExprGroup::new(),
            group_by: None,
            having_group: ExprGroup::new(),
            order_clauses: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    // ==================== SELECT list ====================

    /// Set the select list from plain text.
    pub fn select(mut self, cols: impl Into<String>) -> Self {
        self.select_list = Some(Expr::raw(cols));
        self
    }

    /// Set the select list from a statement with bind values.
    pub fn select_sx(mut self, sx: Sx) -> Self {
        let (stmt, args) = sx.into_stmt_args().into_parts();
        self.select_list = Some(Expr::template(stmt, args));
        self
    }

    // ==================== JOIN ====================

    /// Add a rendered JOIN clause, e.g. from [`TableJoin::on`](crate::TableJoin::on).
    pub fn join(mut self, clause: impl Into<String>) -> Self {
        self.join_clauses.push(clause.into());
        self
    }

    // ==================== ORDER / GROUP ====================

    /// Append an ORDER BY item.
    pub fn order(mut self, ob: OrderBy) -> Self {
        self.order_clauses.push(ob.ox().to_string());
        self
    }

    /// Append ORDER BY items, in order.
    pub fn order_by_columns(self, obs: impl IntoIterator<Item = OrderBy>) -> Self {
        obs.into_iter().fold(self, |qb, ob| qb.order(ob))
    }

    pub fn group_by(mut self, clause: impl Into<String>) -> Self {
        self.group_by = Some(clause.into());
        self
    }

    /// AND a condition into HAVING.
    pub fn having(mut self, cond: impl crate::condition::IntoCondition) -> Self {
        self.having_group.and_expr(cond.into_expr());
        self
    }

    // ==================== Pagination ====================

    pub fn limit(mut self, n: i64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: i64) -> Self {
        self.offset = Some(n);
        self
    }

    /// `page` is 1-based; both arguments are clamped to >= 1.
    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        let p = page.max(1);
        let size = per_page.max(1);
        self.limit = Some(size);
        self.offset = Some((p - 1).saturating_mul(size));
        self
    }

    // ==================== Build ====================

    fn build_tail(&self, sql: &mut String, params: &mut ParamList) {
        for join in &self.join_clauses {
            sql.push(' ');
            sql.push_str(join);
        }

        let where_sql = self.where_group.build_into(params);
        if !where_sql.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&where_sql);
        }

        if let Some(ref group) = self.group_by {
            sql.push_str(" GROUP BY ");
            sql.push_str(group);
        }

        let having_sql = self.having_group.build_into(params);
        if !having_sql.is_empty() {
            sql.push_str(" HAVING ");
            sql.push_str(&having_sql);
        }
    }

    fn build_select(&self) -> (String, ParamList) {
        let mut params = ParamList::new();

        let select_part = match &self.select_list {
            Some(expr) => expr.build(&mut params),
            None => "*".to_string(),
        };
        let mut sql = format!("SELECT {} FROM {}", select_part, self.from_expr);
        self.build_tail(&mut sql, &mut params);

        if !self.order_clauses.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order_clauses.join(", "));
        }
        if let Some(limit) = self.limit {
            sql.push_str(&format!(" LIMIT {limit}"));
        }
        if let Some(offset) = self.offset {
            sql.push_str(&format!(" OFFSET {offset}"));
        }

        (sql, params)
    }

    /// COUNT(*) over the same FROM/JOIN/WHERE; grouped queries are wrapped in a subquery.
    pub fn build_count(&self) -> (String, ParamList) {
        let mut params = ParamList::new();
        if self.group_by.is_some() || !self.having_group.is_empty() {
            let mut inner = format!("SELECT 1 FROM {}", self.from_expr);
            self.build_tail(&mut inner, &mut params);
            (format!("SELECT COUNT(*) FROM ({inner}) AS t"), params)
        } else {
            let mut sql = format!("SELECT COUNT(*) FROM {}", self.from_expr);
            self.build_tail(&mut sql, &mut params);
            (sql, params)
        }
    }

    /// Execute the COUNT query.
    pub async fn count(&self, conn: &impl GenericClient) -> CnmResult<i64> {
        self.validate()?;
        let (sql, params) = self.build_count();
        trace_statement("COUNT", &sql, &params);
        let row = conn.query_one(&sql, &params.as_refs()).await?;
        row.try_get(0).map_err(|e| crate::CnmError::decode("count", e.to_string()))
    }
}

impl SqlQb for SelectQb {
    const KIND: &'static str = "SELECT";

    fn build(&self) -> (String, ParamList) {
        self.build_select()
    }

    fn check_placeholders(&self) -> CnmResult<()> {
        if let Some(list) = &self.select_list {
            list.check_placeholders()?;
        }
        self.where_group.check_placeholders()?;
        self.having_group.check_placeholders()
    }
}

impl WhereQb for SelectQb {
    fn and_expr(mut self, expr: Expr) -> Self {
        self.where_group.and_expr(expr);
        self
    }
}

impl Scoped for SelectQb {}
