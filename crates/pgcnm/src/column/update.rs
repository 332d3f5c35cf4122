//! UPDATE assignment helpers.

use tokio_postgres::types::ToSql;

use super::Column;
use crate::param::Param;
use crate::qb::Expr;
use crate::value_map::ValueMap;

impl<T> Column<T> {
    /// `(name, x)` pair for a plain assignment.
    pub fn kv(&self, x: T) -> (String, T) {
        (self.name().to_string(), x)
    }

    /// `(name, expr)` pair for an expression assignment.
    pub fn ke_exp(&self, expr: Expr) -> (String, Expr) {
        (self.name().to_string(), expr)
    }
}

impl<T: ToSql + Send + Sync + 'static> Column<T> {
    fn binary_expr(&self, op: &str, x: T) -> Expr {
        Expr::template(format!("{} {} ?", self.name(), op), vec![Param::new(x)])
    }

    /// `name + ?`
    pub fn expr_add(&self, x: T) -> Expr {
        self.binary_expr("+", x)
    }

    /// `name - ?`
    pub fn expr_sub(&self, x: T) -> Expr {
        self.binary_expr("-", x)
    }

    /// `name * ?`
    pub fn expr_mul(&self, x: T) -> Expr {
        self.binary_expr("*", x)
    }

    /// `name / ?`
    pub fn expr_div(&self, x: T) -> Expr {
        self.binary_expr("/", x)
    }

    /// `CONCAT(name, ?)`
    pub fn expr_concat(&self, x: T) -> Expr {
        Expr::template(format!("CONCAT({}, ?)", self.name()), vec![Param::new(x)])
    }

    /// `REPLACE(name, ?, ?)`
    pub fn expr_replace(&self, old: T, new: T) -> Expr {
        Expr::template(
            format!("REPLACE({}, ?, ?)", self.name()),
            vec![Param::new(old), Param::new(new)],
        )
    }

    pub fn ke_add(&self, x: T) -> (String, Expr) {
        self.ke_exp(self.expr_add(x))
    }

    pub fn ke_sub(&self, x: T) -> (String, Expr) {
        self.ke_exp(self.expr_sub(x))
    }

    pub fn ke_mul(&self, x: T) -> (String, Expr) {
        self.ke_exp(self.expr_mul(x))
    }

    pub fn ke_div(&self, x: T) -> (String, Expr) {
        self.ke_exp(self.expr_div(x))
    }

    pub fn ke_concat(&self, x: T) -> (String, Expr) {
        self.ke_exp(self.expr_concat(x))
    }

    pub fn ke_replace(&self, old: T, new: T) -> (String, Expr) {
        self.ke_exp(self.expr_replace(old, new))
    }

    /// Single-entry [`ValueMap`], chainable with further `kw` calls.
    pub fn kw(&self, x: T) -> ValueMap {
        ValueMap::new().kw(self.name(), x)
    }
}
