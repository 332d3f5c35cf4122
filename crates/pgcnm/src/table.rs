//! Table-qualified columns and JOIN clauses.

use std::borrow::Cow;

use crate::column::{apply_alias, Column};
use crate::order::OrderBy;

/// Anything that knows its table name.
///
/// `#[derive(Columns)]` implements this for the model and its column set.
pub trait TableName {
    fn table_name(&self) -> &str;
}

/// A bare table name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TableRef(Cow<'static, str>);

impl TableRef {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }
}

impl TableName for TableRef {
    fn table_name(&self) -> &str {
        &self.0
    }
}

impl TableName for str {
    fn table_name(&self) -> &str {
        self
    }
}

impl TableName for String {
    fn table_name(&self) -> &str {
        self
    }
}

/// A column qualified by its table: `table.column`.
pub struct TableColumn<T> {
    table: String,
    column: Column<T>,
}

impl<T> TableColumn<T> {
    pub fn new(table: impl Into<String>, column: Column<T>) -> Self {
        Self {
            table: table.into(),
            column,
        }
    }

    /// `table.column`
    pub fn name(&self) -> String {
        format!("{}.{}", self.table, self.column.name())
    }

    /// The qualified name as a column, so every [`Column`] operation applies.
    pub fn column(&self) -> Column<T> {
        Column::new(self.name())
    }

    /// `a.x = b.y`
    pub fn eq(&self, other: &TableColumn<T>) -> String {
        self.op("=", other)
    }

    /// `a.x != b.y`
    pub fn ne(&self, other: &TableColumn<T>) -> String {
        self.op("!=", other)
    }

    /// `a.x op b.y`
    pub fn op(&self, op: &str, other: &TableColumn<T>) -> String {
        format!("{} {} {}", self.name(), op, other.name())
    }

    pub fn ob(&self, direction: &str) -> OrderBy {
        self.column().ob(direction)
    }

    pub fn as_alias(&self, alias: &str) -> String {
        apply_alias(self.name(), alias)
    }

    pub fn as_name<U>(&self, alias: &Column<U>) -> String {
        apply_alias(self.name(), alias.name())
    }
}

impl<T> Clone for TableColumn<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            column: self.column.clone(),
        }
    }
}

impl<T> std::fmt::Debug for TableColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("TableColumn").field(&self.name()).finish()
    }
}

/// JOIN flavor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Left,
    Right,
    Inner,
    Cross,
}

impl JoinKind {
    pub fn as_sql(self) -> &'static str {
        match self {
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Inner => "INNER",
            JoinKind::Cross => "CROSS",
        }
    }
}

/// A pending JOIN on a table, completed by [`TableJoin::on`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableJoin {
    kind: JoinKind,
    table: String,
}

impl TableJoin {
    pub fn new(kind: JoinKind, table: impl Into<String>) -> Self {
        Self {
            kind,
            table: table.into(),
        }
    }

    pub fn left_join(table: impl Into<String>) -> Self {
        Self::new(JoinKind::Left, table)
    }

    pub fn right_join(table: impl Into<String>) -> Self {
        Self::new(JoinKind::Right, table)
    }

    pub fn inner_join(table: impl Into<String>) -> Self {
        Self::new(JoinKind::Inner, table)
    }

    pub fn cross_join(table: impl Into<String>) -> Self {
        Self::new(JoinKind::Cross, table)
    }

    pub fn kind(&self) -> JoinKind {
        self.kind
    }

    /// `KIND JOIN table ON s1 AND s2 ...`; without conditions the `ON` is left out.
    pub fn on<I>(&self, stmts: I) -> String
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let conds: Vec<I::Item> = stmts.into_iter().collect();
        let conds: Vec<&str> = conds.iter().map(|s| s.as_ref()).collect();
        let head = format!("{} JOIN {}", self.kind.as_sql(), self.table);
        if conds.is_empty() {
            head
        } else {
            format!("{head} ON {}", conds.join(" AND "))
        }
    }
}
