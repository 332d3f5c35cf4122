//! ORDER BY fragments.

use crate::qb::SelectQb;
use crate::scope::ScopeFn;

/// One or more `column direction` items.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct OrderBy(String);

impl OrderBy {
    pub fn new(clause: impl Into<String>) -> Self {
        Self(clause.into())
    }

    /// Append another item: `"a ASC , b DESC"`.
    pub fn ob(&self, next: &OrderBy) -> OrderBy {
        OrderBy(format!("{} , {}", self.0, next.0))
    }

    /// The clause text.
    pub fn ox(&self) -> &str {
        &self.0
    }

    pub fn orders(&self) -> &str {
        &self.0
    }

    /// A scope that appends this ordering to a [`SelectQb`].
    pub fn scope(&self) -> ScopeFn<SelectQb> {
        let ob = self.clone();
        Box::new(move |qb: SelectQb| qb.order(ob.clone()))
    }
}

impl std::fmt::Display for OrderBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for OrderBy {
    fn from(clause: String) -> Self {
        OrderBy(clause)
    }
}

impl From<&str> for OrderBy {
    fn from(clause: &str) -> Self {
        OrderBy(clause.to_string())
    }
}
