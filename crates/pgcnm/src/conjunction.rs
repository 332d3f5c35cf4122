//! AND / OR / NOT composition of condition fragments.
//!
//! Every operand is wrapped in its own parentheses and so is the whole group, so
//! nested conjunctions never change meaning through operator precedence:
//!
//! ```ignore
//! use pgcnm::Qs;
//!
//! let q = Qs::new("a=1").and([Qs::new("b=2"), Qs::new("c=3")]);
//! assert_eq!(q.qs(), "((a=1) AND (b=2) AND (c=3))");
//! ```
//!
//! [`Qx`] does the same for statements that carry bind values and concatenates the
//! arguments left to right.

use std::borrow::Borrow;

use tokio_postgres::types::ToSql;

use crate::param::Param;
use crate::qb::WhereQb;
use crate::scope::ScopeFn;
use crate::stmt::{impl_not_executable, StmtArgs, StmtArgsTuple};

fn join_wrapped<'a>(first: &str, rest: impl IntoIterator<Item = &'a str>, sep: &str) -> String {
    let mut out = String::from("((");
    out.push_str(first);
    out.push(')');
    for stmt in rest {
        out.push_str(sep);
        out.push('(');
        out.push_str(stmt);
        out.push(')');
    }
    out.push(')');
    out
}

/// An argument-free condition string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Qs(String);

impl Qs {
    pub fn new(stmt: impl Into<String>) -> Self {
        Self(stmt.into())
    }

    /// `((self) AND (o1) AND ...)`
    pub fn and<I>(&self, others: I) -> Qs
    where
        I: IntoIterator,
        I::Item: Borrow<Qs>,
    {
        let others: Vec<I::Item> = others.into_iter().collect();
        Qs(join_wrapped(
            &self.0,
            others.iter().map(|q| q.borrow().0.as_str()),
            " AND ",
        ))
    }

    /// `((self) OR (o1) OR ...)`
    pub fn or<I>(&self, others: I) -> Qs
    where
        I: IntoIterator,
        I::Item: Borrow<Qs>,
    {
        let others: Vec<I::Item> = others.into_iter().collect();
        Qs(join_wrapped(
            &self.0,
            others.iter().map(|q| q.borrow().0.as_str()),
            " OR ",
        ))
    }

    /// `NOT(self)`
    pub fn not(&self) -> Qs {
        Qs(format!("NOT({})", self.0))
    }

    /// The condition text.
    pub fn qs(&self) -> &str {
        &self.0
    }

    /// Lift into a [`Qx`] with no arguments.
    pub fn qx(&self) -> Qx {
        Qx::bare(self.0.clone())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Qs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Qs {
    fn from(stmt: String) -> Self {
        Qs(stmt)
    }
}

impl From<&str> for Qs {
    fn from(stmt: &str) -> Self {
        Qs(stmt.to_string())
    }
}

/// A condition statement with its bind values.
#[derive(Clone, Debug, Default)]
pub struct Qx(StmtArgs);

impl Qx {
    pub fn new(stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Self {
        Self(StmtArgs::new(stmt, args))
    }

    /// A condition with no arguments.
    pub fn bare(stmt: impl Into<String>) -> Self {
        Self(StmtArgs::new(stmt, Vec::new()))
    }

    fn conjoin<I>(&self, others: I, sep: &str) -> Qx
    where
        I: IntoIterator,
        I::Item: Borrow<Qx>,
    {
        let others: Vec<I::Item> = others.into_iter().collect();
        let stmt = join_wrapped(
            &self.0.stmt,
            others.iter().map(|q| q.borrow().0.stmt.as_str()),
            sep,
        );
        let args = self.0.combine_args(others.iter().map(|q| &q.borrow().0));
        Qx(StmtArgs { stmt, args })
    }

    /// `((self) AND (o1) AND ...)` with arguments in operand order.
    pub fn and<I>(&self, others: I) -> Qx
    where
        I: IntoIterator,
        I::Item: Borrow<Qx>,
    {
        self.conjoin(others, " AND ")
    }

    /// `((self) OR (o1) OR ...)` with arguments in operand order.
    pub fn or<I>(&self, others: I) -> Qx
    where
        I: IntoIterator,
        I::Item: Borrow<Qx>,
    {
        self.conjoin(others, " OR ")
    }

    /// `NOT(self)`; arguments are kept.
    pub fn not(&self) -> Qx {
        Qx(StmtArgs {
            stmt: format!("NOT({})", self.0.stmt),
            args: self.0.args.clone(),
        })
    }

    /// Shortcut for `self.and([Qx::new(stmt, args)])`.
    pub fn and1(&self, stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Qx {
        self.and([Qx::new(stmt, args)])
    }

    /// Shortcut for `self.or([Qx::new(stmt, args)])`.
    pub fn or1(&self, stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Qx {
        self.or([Qx::new(stmt, args)])
    }

    /// A scope that adds this condition to any builder with a WHERE clause.
    pub fn scope<Q: WhereQb + 'static>(&self) -> ScopeFn<Q> {
        let qx = self.clone();
        Box::new(move |qb: Q| qb.and_where(qx.clone()))
    }

    pub fn into_stmt_args(self) -> StmtArgs {
        self.0
    }
}

impl StmtArgsTuple for Qx {
    fn stmt_args(&self) -> &StmtArgs {
        &self.0
    }
}

impl From<Qs> for Qx {
    fn from(qs: Qs) -> Self {
        Qx::bare(qs.0)
    }
}

impl From<String> for Qx {
    fn from(stmt: String) -> Self {
        Qx::bare(stmt)
    }
}

impl From<&str> for Qx {
    fn from(stmt: &str) -> Self {
        Qx::bare(stmt)
    }
}

impl<T: ToSql + Send + Sync + 'static> From<(String, T)> for Qx {
    fn from((stmt, x): (String, T)) -> Self {
        Qx::new(stmt, [Param::new(x)])
    }
}

impl<T: ToSql + Send + Sync + 'static> From<(String, T, T)> for Qx {
    fn from((stmt, a, b): (String, T, T)) -> Self {
        Qx::new(stmt, [Param::new(a), Param::new(b)])
    }
}

impl_not_executable!(Qs, Qx);
