//! NULL-safe aggregate wrappers.
//!
//! An aggregate over zero rows yields NULL. [`Coalesce`] wraps the aggregate in a
//! null-replacing function so the select list always produces a value:
//! `COALESCE(SUM(price), 0) as total`.

use crate::column::apply_alias;

/// Renders `METHOD(SFN(column), DFV)` fragments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Coalesce {
    method: String,
    column: String,
}

impl Coalesce {
    /// `method` is the null-replacing function, e.g. `COALESCE`.
    pub fn new(method: impl Into<String>, column: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            column: column.into(),
        }
    }

    /// `METHOD(sfn(column), dfv)`. An empty `dfv` means `0`; an empty `alias` means
    /// no alias.
    pub fn stmt(&self, sfn: &str, dfv: &str, alias: &str) -> String {
        let dfv = if dfv.is_empty() { "0" } else { dfv };
        apply_alias(
            format!("{}({}({}), {})", self.method, sfn, self.column, dfv),
            alias,
        )
    }

    pub fn sum_stmt(&self, alias: &str) -> String {
        self.stmt("SUM", "0", alias)
    }

    pub fn max_stmt(&self, alias: &str) -> String {
        self.stmt("MAX", "0", alias)
    }

    pub fn min_stmt(&self, alias: &str) -> String {
        self.stmt("MIN", "0", alias)
    }

    pub fn avg_stmt(&self, alias: &str) -> String {
        self.stmt("AVG", "0", alias)
    }
}
