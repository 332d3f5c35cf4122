//! Trait definitions for query builders.

use crate::client::GenericClient;
use crate::condition::IntoCondition;
use crate::error::{CnmError, CnmResult};
use crate::param::ParamList;
use crate::qb::Expr;
use crate::row::FromRow;
use tokio_postgres::Row;

#[cfg(feature = "tracing")]
const MAX_LOGGED_SQL: usize = 200;

/// Emit the statement about to run on target `pgcnm.sql`.
#[cfg(feature = "tracing")]
pub(crate) fn trace_statement(kind: &'static str, sql: &str, params: &ParamList) {
    let shown = match sql.char_indices().nth(MAX_LOGGED_SQL) {
        Some((cut, _)) => format!("{}...", &sql[..cut]),
        None => sql.to_string(),
    };
    tracing::debug!(
        target: "pgcnm.sql",
        kind,
        param_count = params.len(),
        sql = %shown,
        "executing statement"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn trace_statement(_kind: &'static str, _sql: &str, _params: &ParamList) {}

/// Base trait for all query builders.
///
/// `build()` renders the SQL and the parameters together so that placeholders from
/// every clause share one numbering.
pub trait SqlQb: Sync {
    /// Statement kind for logs (`SELECT`, `UPDATE`, `DELETE`).
    const KIND: &'static str;

    /// Render SQL with `$n` placeholders and the matching parameters.
    fn build(&self) -> (String, ParamList);

    /// Debug helper to get the SQL string.
    fn to_sql(&self) -> String {
        self.build().0
    }

    /// Any error recorded while the builder was assembled.
    fn build_error(&self) -> Option<&str> {
        None
    }

    /// Each template's placeholders must match its values; a mismatch is
    /// [`CnmError::ArgCount`].
    fn check_placeholders(&self) -> CnmResult<()> {
        Ok(())
    }

    /// Validate builder state before execution.
    fn validate(&self) -> CnmResult<()> {
        if let Some(msg) = self.build_error() {
            return Err(CnmError::validation(msg));
        }
        self.check_placeholders()
    }

    /// Validate, render and log; shared by every execution method.
    fn prepare(&self) -> CnmResult<(String, ParamList)> {
        self.validate()?;
        let (sql, params) = self.build();
        trace_statement(Self::KIND, &sql, &params);
        Ok((sql, params))
    }

    /// Execute query and return all rows.
    fn query(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<Vec<Row>>> + Send {
        async move {
            let (sql, params) = self.prepare()?;
            conn.query(&sql, &params.as_refs()).await
        }
    }

    /// Execute query and return at most one row.
    fn query_opt(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<Option<Row>>> + Send {
        async move {
            let (sql, params) = self.prepare()?;
            conn.query_opt(&sql, &params.as_refs()).await
        }
    }

    /// Execute query and return the first row; no rows is [`CnmError::NotFound`].
    fn query_one(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<Row>> + Send {
        async move {
            let (sql, params) = self.prepare()?;
            conn.query_one(&sql, &params.as_refs()).await
        }
    }

    /// Execute query and map all rows to `T`.
    fn fetch_all<T: FromRow>(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<Vec<T>>> + Send {
        async move {
            let rows = self.query(conn).await?;
            rows.iter().map(T::from_row).collect()
        }
    }

    /// Execute query and map at most one row to `T`.
    fn fetch_opt<T: FromRow>(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<Option<T>>> + Send {
        async move {
            let row = self.query_opt(conn).await?;
            row.as_ref().map(T::from_row).transpose()
        }
    }

    /// Execute query and map the first row to `T`.
    fn fetch_one<T: FromRow>(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<T>> + Send {
        async move {
            let row = self.query_one(conn).await?;
            T::from_row(&row)
        }
    }
}

/// Trait for mutation builders (UPDATE/DELETE).
pub trait MutationQb: SqlQb {
    /// Execute and return affected row count.
    fn execute(
        &self,
        conn: &impl GenericClient,
    ) -> impl std::future::Future<Output = CnmResult<u64>> + Send {
        async move {
            let (sql, params) = self.prepare()?;
            conn.execute(&sql, &params.as_refs()).await
        }
    }
}

/// Builders with a WHERE clause.
pub trait WhereQb: Sized {
    /// AND an expression into the WHERE clause.
    fn and_expr(self, expr: Expr) -> Self;

    /// AND any condition fragment into the WHERE clause.
    fn and_where(self, cond: impl IntoCondition) -> Self {
        self.and_expr(cond.into_expr())
    }

    /// AND every condition, in order.
    fn where_all<C: IntoCondition>(self, conds: impl IntoIterator<Item = C>) -> Self {
        conds.into_iter().fold(self, |qb, c| qb.and_where(c))
    }

    /// AND the condition only when `value` is present.
    fn and_where_opt<V, C: IntoCondition>(self, value: Option<V>, cond: impl FnOnce(V) -> C) -> Self {
        match value {
            Some(v) => self.and_where(cond(v)),
            None => self,
        }
    }
}
