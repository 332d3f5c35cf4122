//! Typed column names.
//!
//! A [`Column<T>`] is a column name tagged with the Rust type of its values. Every
//! operation is a pure function of the name and its arguments and returns a new
//! fragment; nothing is validated or escaped.
//!
//! ```ignore
//! use pgcnm::prelude::*;
//!
//! const NAME: Column<String> = Column::from_static("name");
//!
//! let (stmt, value) = NAME.eq("alice".to_string());
//! assert_eq!(stmt, "name=?");
//! ```

mod aggregate;
mod update;

use std::borrow::Cow;
use std::marker::PhantomData;

use tokio_postgres::types::ToSql;

use crate::clause::ClauseColumn;
use crate::conjunction::{Qs, Qx};
use crate::order::OrderBy;
use crate::param::Param;
use crate::table::{TableColumn, TableName};

/// A column name with a compile-time value type.
pub struct Column<T> {
    name: Cow<'static, str>,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Column<T> {
    /// Create a column from any name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            _marker: PhantomData,
        }
    }

    /// Create a column from a static name, usable in `const` items.
    pub const fn from_static(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _marker: PhantomData,
        }
    }

    /// The raw column name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build `"name op"`.
    pub fn qs(&self, op: &str) -> String {
        format!("{} {}", self.name, op)
    }

    /// Build `("name op", x)`.
    pub fn op(&self, op: &str, x: T) -> (String, T) {
        (self.qs(op), x)
    }

    /// `name=?`
    pub fn eq(&self, x: T) -> (String, T) {
        (format!("{}=?", self.name), x)
    }

    /// `name!=?`
    pub fn ne(&self, x: T) -> (String, T) {
        (format!("{}!=?", self.name), x)
    }

    /// `name>?`
    pub fn gt(&self, x: T) -> (String, T) {
        (format!("{}>?", self.name), x)
    }

    /// `name>=?`
    pub fn gte(&self, x: T) -> (String, T) {
        (format!("{}>=?", self.name), x)
    }

    /// `name<?`
    pub fn lt(&self, x: T) -> (String, T) {
        (format!("{}<?", self.name), x)
    }

    /// `name<=?`
    pub fn lte(&self, x: T) -> (String, T) {
        (format!("{}<=?", self.name), x)
    }

    /// Match any value of `xs`, bound as a single array parameter.
    ///
    /// An empty list matches nothing.
    pub fn in_list(&self, xs: Vec<T>) -> (String, Vec<T>) {
        (format!("{} = ANY(?)", self.name), xs)
    }

    /// Match none of `xs`, bound as a single array parameter.
    ///
    /// An empty list matches every non-NULL value.
    pub fn not_in(&self, xs: Vec<T>) -> (String, Vec<T>) {
        (format!("{} <> ALL(?)", self.name), xs)
    }

    pub fn like(&self, x: T) -> (String, T) {
        (format!("{} LIKE ?", self.name), x)
    }

    pub fn not_like(&self, x: T) -> (String, T) {
        (format!("{} NOT LIKE ?", self.name), x)
    }

    pub fn ilike(&self, x: T) -> (String, T) {
        (format!("{} ILIKE ?", self.name), x)
    }

    pub fn not_ilike(&self, x: T) -> (String, T) {
        (format!("{} NOT ILIKE ?", self.name), x)
    }

    pub fn is_null(&self) -> String {
        format!("{} IS NULL", self.name)
    }

    pub fn is_not_null(&self) -> String {
        format!("{} IS NOT NULL", self.name)
    }

    pub fn is_true(&self) -> String {
        format!("{} IS TRUE", self.name)
    }

    pub fn is_false(&self) -> String {
        format!("{} IS FALSE", self.name)
    }

    /// `name BETWEEN ? AND ?`
    pub fn between(&self, from: T, to: T) -> (String, T, T) {
        (format!("{} BETWEEN ? AND ?", self.name), from, to)
    }

    /// `name NOT BETWEEN ? AND ?`
    pub fn not_between(&self, from: T, to: T) -> (String, T, T) {
        (format!("{} NOT BETWEEN ? AND ?", self.name), from, to)
    }

    /// Column-to-column equality, for join conditions: `name=other`.
    pub fn on_eq(&self, other: &Column<T>) -> String {
        format!("{}={}", self.name, other.name)
    }

    /// Column-to-column inequality: `name!=other`.
    pub fn on_ne(&self, other: &Column<T>) -> String {
        format!("{}!={}", self.name, other.name)
    }

    /// `name as alias`, or the bare name when `alias` is empty.
    pub fn as_alias(&self, alias: &str) -> String {
        apply_alias(self.name.to_string(), alias)
    }

    /// Alias this column with another column's name.
    pub fn as_name<U>(&self, other: &Column<U>) -> String {
        self.as_alias(other.name())
    }

    /// Wrap the name in quote characters.
    ///
    /// - `""`: one space on each side
    /// - one character `q`: `qnameq`
    /// - two characters `ab`: `anameb`
    /// - anything longer: falls back to double quotes
    ///
    /// Characters, not bytes, are counted.
    pub fn safe_cnm(&self, quote: &str) -> Column<T> {
        let mut chars = quote.chars();
        let quoted = match (chars.next(), chars.next(), chars.next()) {
            (None, _, _) => format!(" {} ", self.name),
            (Some(q), None, _) => format!("{q}{}{q}", self.name),
            (Some(open), Some(close), None) => format!("{open}{}{close}", self.name),
            _ => format!("\"{}\"", self.name),
        };
        Column::new(quoted)
    }

    /// `ORDER BY` item with an explicit direction.
    pub fn ob(&self, direction: &str) -> OrderBy {
        OrderBy::new(format!("{} {}", self.name, direction))
    }

    pub fn asc(&self) -> OrderBy {
        self.ob("ASC")
    }

    pub fn desc(&self) -> OrderBy {
        self.ob("DESC")
    }

    /// Argument-free condition: `Qs("name op")`.
    pub fn qc(&self, op: &str) -> Qs {
        Qs::new(self.qs(op))
    }

    /// Qualify with a table.
    pub fn with_table(&self, table: &(impl TableName + ?Sized)) -> TableColumn<T> {
        TableColumn::new(table.table_name(), self.clone())
    }

    /// Qualify with a table name.
    pub fn tn(&self, table: &str) -> TableColumn<T> {
        TableColumn::new(table, self.clone())
    }

    /// Structured column reference rendered with identifier quoting.
    pub fn clause(&self) -> ClauseColumn<T> {
        ClauseColumn::new(self.name.clone())
    }

    pub fn clause_with_table(&self, table: &str) -> ClauseColumn<T> {
        self.clause().with_table(table)
    }
}

impl<T: ToSql + Send + Sync + 'static> Column<T> {
    /// Condition with one bound value: `Qx("name op", [x])`.
    pub fn qx(&self, op: &str, x: T) -> Qx {
        Qx::new(self.qs(op), [Param::new(x)])
    }
}

/// Create a column of type `T`.
pub fn column<T>(name: impl Into<Cow<'static, str>>) -> Column<T> {
    Column::new(name)
}

/// Create a column whose type is taken from a sample value.
pub fn cnm<T>(_sample: &T, name: impl Into<Cow<'static, str>>) -> Column<T> {
    Column::new(name)
}

pub(crate) fn apply_alias(stmt: String, alias: &str) -> String {
    if alias.is_empty() {
        stmt
    } else {
        format!("{stmt} as {alias}")
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

impl<T> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for Column<T> {}

impl<T> std::hash::Hash for Column<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T> std::fmt::Display for Column<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

impl<T> AsRef<str> for Column<T> {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests;
