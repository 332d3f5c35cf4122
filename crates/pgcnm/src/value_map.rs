//! Column → value maps for UPDATE assignments.

use tokio_postgres::types::ToSql;

use crate::param::Param;
use crate::qb::Expr;

/// Right-hand side of an assignment.
#[derive(Clone, Debug)]
pub enum SetValue {
    /// Bound as a parameter.
    Value(Param),
    /// Rendered as an expression, e.g. `price + ?`.
    Expr(Expr),
}

/// Insertion-ordered column → value map.
///
/// Writing a column that is already present replaces its value in place, so the
/// rendered `SET` list keeps first-write order and never repeats a column.
#[derive(Clone, Debug, Default)]
pub struct ValueMap {
    entries: Vec<(String, SetValue)>,
}

impl ValueMap {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace an entry.
    pub fn insert(&mut self, column: impl Into<String>, value: SetValue) {
        let column = column.into();
        match self.entries.iter_mut().find(|(c, _)| *c == column) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((column, value)),
        }
    }

    /// Chainable bound-value assignment.
    pub fn kw<T: ToSql + Send + Sync + 'static>(mut self, column: impl Into<String>, value: T) -> Self {
        self.insert(column, SetValue::Value(Param::new(value)));
        self
    }

    /// Chainable expression assignment.
    pub fn kw_expr(mut self, column: impl Into<String>, expr: Expr) -> Self {
        self.insert(column, SetValue::Expr(expr));
        self
    }

    /// Chainable form of a `ke_*` pair.
    pub fn ke(self, (column, expr): (String, Expr)) -> Self {
        self.kw_expr(column, expr)
    }

    /// Merge `other` into this map; its entries win on conflict.
    pub fn merge(mut self, other: ValueMap) -> Self {
        for (column, value) in other.entries {
            self.insert(column, value);
        }
        self
    }

    pub fn get(&self, column: &str) -> Option<&SetValue> {
        self.entries
            .iter()
            .find(|(c, _)| c == column)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SetValue)> {
        self.entries.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Column names in order.
    pub fn columns(&self) -> Vec<&str> {
        self.entries.iter().map(|(c, _)| c.as_str()).collect()
    }
}

impl IntoIterator for ValueMap {
    type Item = (String, SetValue);
    type IntoIter = std::vec::IntoIter<(String, SetValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<T: ToSql + Send + Sync + 'static> From<(String, T)> for ValueMap {
    fn from((column, value): (String, T)) -> Self {
        ValueMap::new().kw(column, value)
    }
}

impl From<(String, Expr)> for ValueMap {
    fn from((column, expr): (String, Expr)) -> Self {
        ValueMap::new().kw_expr(column, expr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    #[test]
    fn later_writes_replace_in_place() {
        let map = ValueMap::new().kw("a", 1i32).kw("b", 2i32).kw("a", 3i32);
        assert_eq!(map.columns(), vec!["a", "b"]);
        match map.get("a") {
            Some(SetValue::Value(p)) => assert_eq!(format!("{p:?}"), "3"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn merge_prefers_other() {
        let price: Column<i64> = Column::new("price");
        let name: Column<String> = Column::new("name");
        let map = price
            .kw(10)
            .merge(name.kw("x".to_string()).ke(price.ke_add(5)));
        assert_eq!(map.columns(), vec!["price", "name"]);
        assert!(matches!(map.get("price"), Some(SetValue::Expr(_))));
    }

    #[test]
    fn from_pairs() {
        let stock: Column<i32> = Column::new("stock");
        assert_eq!(ValueMap::from(stock.kv(3)).len(), 1);
        assert_eq!(ValueMap::from(stock.ke_sub(1)).columns(), vec!["stock"]);
    }
}
