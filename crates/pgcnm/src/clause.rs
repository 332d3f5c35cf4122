//! Structured column references rendered with identifier quoting.

use std::borrow::Cow;
use std::marker::PhantomData;

use tokio_postgres::types::ToSql;

use crate::error::CnmResult;
use crate::ident::Ident;
use crate::param::Param;

/// A column reference with optional table and alias.
///
/// Unless `raw` is set, the table and column are quoted as identifiers:
/// `"users"."name" AS "n"`. A raw column is rendered verbatim.
pub struct ClauseColumn<T> {
    table: String,
    name: Cow<'static, str>,
    alias: String,
    raw: bool,
    _marker: PhantomData<fn() -> T>,
}

impl<T> ClauseColumn<T> {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            table: String::new(),
            name: name.into(),
            alias: String::new(),
            raw: false,
            _marker: PhantomData,
        }
    }

    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = alias.into();
        self
    }

    pub fn with_raw(mut self, raw: bool) -> Self {
        self.raw = raw;
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Reference usable on the left of `SET x = ...`, without the alias.
    pub fn target_sql(&self) -> CnmResult<String> {
        if self.raw {
            return Ok(self.name.to_string());
        }
        Ok(Ident::qualified(&self.table, &self.name)?.to_sql())
    }

    /// Full reference including `AS "alias"`.
    pub fn to_sql(&self) -> CnmResult<String> {
        let mut sql = self.target_sql()?;
        if !self.alias.is_empty() {
            sql.push_str(" AS ");
            if self.raw {
                sql.push_str(&self.alias);
            } else {
                Ident::quoted(&self.alias)?.write_sql(&mut sql);
            }
        }
        Ok(sql)
    }
}

impl<T: ToSql + Send + Sync + 'static> ClauseColumn<T> {
    /// Pair this column with a value for [`UpdateQb::set_assignment`](crate::qb::UpdateQb::set_assignment).
    pub fn assignment(&self, value: T) -> Assignment {
        Assignment {
            column: ClauseColumn {
                table: self.table.clone(),
                name: self.name.clone(),
                alias: self.alias.clone(),
                raw: self.raw,
                _marker: PhantomData,
            },
            value: Param::new(value),
        }
    }
}

impl<T> Clone for ClauseColumn<T> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            name: self.name.clone(),
            alias: self.alias.clone(),
            raw: self.raw,
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for ClauseColumn<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClauseColumn")
            .field("table", &self.table)
            .field("name", &self.name)
            .field("alias", &self.alias)
            .field("raw", &self.raw)
            .finish()
    }
}

/// `column = value`, with the column's value type erased.
#[derive(Clone, Debug)]
pub struct Assignment {
    pub column: ClauseColumn<()>,
    pub value: Param,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    #[test]
    fn quoted_rendering() {
        let name: Column<String> = Column::new("name");
        assert_eq!(name.clause().to_sql().unwrap(), r#""name""#);
        assert_eq!(
            name.clause_with_table("users").with_alias("n").to_sql().unwrap(),
            r#""users"."name" AS "n""#
        );
    }

    #[test]
    fn raw_is_verbatim() {
        let c: ClauseColumn<i32> = ClauseColumn::new("lower(name)").with_raw(true).with_alias("ln");
        assert_eq!(c.to_sql().unwrap(), "lower(name) AS ln");
    }

    #[test]
    fn invalid_identifier_is_a_validation_error() {
        let c: ClauseColumn<i32> = ClauseColumn::new("");
        assert!(matches!(c.to_sql(), Err(crate::CnmError::Validation(_))));
    }

    #[test]
    fn assignment_carries_value() {
        let age: Column<i32> = Column::new("age");
        let a = age.clause_with_table("users").assignment(42);
        assert_eq!(a.column.target_sql().unwrap(), r#""users"."age""#);
        assert_eq!(format!("{:?}", a.value), "42");
    }
}
