//! Select-list fragments with bind values.

use std::borrow::Borrow;

use crate::param::Param;
use crate::qb::SelectQb;
use crate::scope::ScopeFn;
use crate::stmt::{impl_not_executable, StmtArgs, StmtArgsTuple};

/// A select-list statement, e.g. `COUNT(CASE WHEN (age > ?) THEN 1 END) as adults`,
/// with the values its placeholders bind to.
#[derive(Clone, Debug, Default)]
pub struct Sx(StmtArgs);

impl Sx {
    pub fn new(stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Self {
        Self(StmtArgs::new(stmt, args))
    }

    /// Join with `others` as `"a, b, c"`, arguments concatenated in order.
    pub fn combine<I>(&self, others: I) -> Sx
    where
        I: IntoIterator,
        I::Item: Borrow<Sx>,
    {
        let others: Vec<I::Item> = others.into_iter().collect();
        let mut stmt = self.0.stmt.clone();
        for other in &others {
            stmt.push_str(", ");
            stmt.push_str(&other.borrow().0.stmt);
        }
        let args = self.0.combine_args(others.iter().map(|s| &s.borrow().0));
        Sx(StmtArgs { stmt, args })
    }

    /// A scope that replaces the select list of a [`SelectQb`].
    pub fn scope(&self) -> ScopeFn<SelectQb> {
        let sx = self.clone();
        Box::new(move |qb: SelectQb| qb.select_sx(sx.clone()))
    }

    pub fn into_stmt_args(self) -> StmtArgs {
        self.0
    }
}

impl StmtArgsTuple for Sx {
    fn stmt_args(&self) -> &StmtArgs {
        &self.0
    }
}

impl From<String> for Sx {
    fn from(stmt: String) -> Self {
        Sx(StmtArgs::new(stmt, Vec::new()))
    }
}

impl From<&str> for Sx {
    fn from(stmt: &str) -> Self {
        Sx(StmtArgs::new(stmt, Vec::new()))
    }
}

impl_not_executable!(Sx);
