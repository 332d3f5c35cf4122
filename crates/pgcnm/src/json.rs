//! `jsonb` path expressions.
//!
//! Paths are dotted keys (`"profile.address.city"`). A one-segment path uses the
//! `->` / `->>` operators; longer paths use `#>` / `#>>` with a text-array path.
//! Purely numeric segments address array elements.
//!
//! ```ignore
//! use pgcnm::prelude::*;
//!
//! let meta: Column<serde_json::Value> = Column::new("meta");
//! let city = meta.json().get("address.city");
//! assert_eq!(city.name(), "meta #>> '{address,city}'");
//! ```

use serde::Serialize;

use crate::column::{apply_alias, Column};
use crate::error::CnmResult;

/// Rust types stored in JSON-capable columns.
pub trait JsonSource {}

impl JsonSource for String {}
impl JsonSource for serde_json::Value {}
impl<T> JsonSource for tokio_postgres::types::Json<T> {}
impl<T: JsonSource> JsonSource for Option<T> {}

impl<T: JsonSource> Column<T> {
    /// Treat this column as `jsonb`.
    pub fn json(&self) -> JsonColumn {
        JsonColumn::new(self.name())
    }
}

fn escape_literal(s: &str) -> String {
    s.replace('\'', "''")
}

fn is_index(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

/// `'{a,b,0}'`
fn path_array(path: &str) -> String {
    let parts: Vec<String> = path
        .split('.')
        .map(|seg| {
            if seg.is_empty() || seg.contains([',', '{', '}', '"', ' ', '\\']) {
                format!("\"{}\"", seg.replace('\\', "\\\\").replace('"', "\\\""))
            } else {
                seg.to_string()
            }
        })
        .collect();
    format!("'{{{}}}'", escape_literal(&parts.join(",")))
}

/// A `jsonb` column or sub-document expression.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct JsonColumn {
    expr: String,
}

impl JsonColumn {
    pub fn new(expr: impl Into<String>) -> Self {
        Self { expr: expr.into() }
    }

    /// The SQL expression.
    pub fn name(&self) -> &str {
        &self.expr
    }

    fn access(&self, path: &str, as_text: bool) -> String {
        if path.contains('.') {
            let op = if as_text { "#>>" } else { "#>" };
            format!("{} {} {}", self.expr, op, path_array(path))
        } else {
            let op = if as_text { "->>" } else { "->" };
            if is_index(path) {
                format!("{} {} {}", self.expr, op, path)
            } else {
                format!("{} {} '{}'", self.expr, op, escape_literal(path))
            }
        }
    }

    /// Value at `path` as text.
    pub fn get(&self, path: &str) -> Column<String> {
        Column::new(self.access(path, true))
    }

    /// Sub-document at `path`, still `jsonb`.
    pub fn extract(&self, path: &str) -> JsonColumn {
        JsonColumn::new(self.access(path, false))
    }

    /// Value at `path` cast to `BIGINT`.
    pub fn get_int(&self, path: &str) -> Column<i64> {
        Column::new(format!("CAST({} AS BIGINT)", self.access(path, true)))
    }

    /// `jsonb_array_length` of the document, or of the array at `path`.
    pub fn length(&self, path: &str) -> Column<i32> {
        if path.is_empty() {
            Column::new(format!("jsonb_array_length({})", self.expr))
        } else {
            Column::new(format!("jsonb_array_length({})", self.access(path, false)))
        }
    }

    /// `jsonb_typeof` of the document, or of the value at `path`.
    pub fn type_of(&self, path: &str) -> Column<String> {
        if path.is_empty() {
            Column::new(format!("jsonb_typeof({})", self.expr))
        } else {
            Column::new(format!("jsonb_typeof({})", self.access(path, false)))
        }
    }

    /// `expr IS JSON` (PostgreSQL 16+). Useful on text columns holding JSON.
    pub fn valid(&self) -> Column<bool> {
        Column::new(format!("{} IS JSON", self.expr))
    }

    /// `jsonb_set(expr, '{path}', '<value>'::jsonb)`.
    ///
    /// The value is serialized with serde and embedded as a literal.
    pub fn set<V: Serialize + ?Sized>(&self, path: &str, value: &V) -> CnmResult<JsonColumn> {
        let json = serde_json::to_string(value)?;
        Ok(JsonColumn::new(format!(
            "jsonb_set({}, {}, '{}'::jsonb)",
            self.expr,
            path_array(path),
            escape_literal(&json)
        )))
    }

    /// `expr #- '{path}'`
    pub fn remove(&self, path: &str) -> JsonColumn {
        JsonColumn::new(format!("{} #- {}", self.expr, path_array(path)))
    }

    /// The expression as a plain column, for use in conditions and select lists.
    pub fn column(&self) -> Column<serde_json::Value> {
        Column::new(self.expr.clone())
    }

    pub fn as_alias(&self, alias: &str) -> String {
        apply_alias(self.expr.clone(), alias)
    }
}

impl std::fmt::Display for JsonColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.expr)
    }
}
