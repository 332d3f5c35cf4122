//! Aggregate select-list fragments.

use super::{apply_alias, Column};
use crate::coalesce::Coalesce;

impl<T> Column<T> {
    /// `COUNT(name)`, optionally aliased. NULLs are not counted.
    pub fn count(&self, alias: &str) -> String {
        apply_alias(format!("COUNT({})", self.name()), alias)
    }

    /// `COUNT(DISTINCT(name))`, optionally aliased.
    pub fn count_distinct(&self, alias: &str) -> String {
        apply_alias(format!("COUNT(DISTINCT({}))", self.name()), alias)
    }

    /// `COALESCE(...)` guardian for aggregates over this column.
    pub fn coalesce(&self) -> Coalesce {
        Coalesce::new("COALESCE", self.name())
    }

    /// `IFNULL(...)` guardian. PostgreSQL has no `IFNULL`; use [`Column::coalesce`]
    /// there and keep this for statements sent to other engines.
    pub fn ifnull(&self) -> Coalesce {
        Coalesce::new("IFNULL", self.name())
    }
}
