//! Free helpers over fragments and host builders.
//!
//! Every function here is a thin shortcut: the same result is reachable through the
//! methods on [`Column`](crate::Column), [`Qx`], [`Sx`] and the builders. They exist
//! for call sites that work with slices of fragments instead of single values.

use tokio_postgres::types::ToSql;

use crate::column::apply_alias;
use crate::conjunction::Qx;
use crate::order::OrderBy;
use crate::param::Param;
use crate::qb::{SelectQb, UpdateQb, WhereQb};
use crate::select::Sx;
use crate::stmt::StmtArgsTuple;
use crate::table::TableJoin;
use crate::value_map::ValueMap;

/// Build a condition from a statement and its values.
pub fn qx(stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Qx {
    Qx::new(stmt, args)
}

/// Build a select-list statement from a statement and its values.
pub fn sx(stmt: impl Into<String>, args: impl IntoIterator<Item = Param>) -> Sx {
    Sx::new(stmt, args)
}

/// Single-entry assignment map.
pub fn kw<T: ToSql + Send + Sync + 'static>(column: impl Into<String>, value: T) -> ValueMap {
    ValueMap::new().kw(column, value)
}

pub fn new_kw() -> ValueMap {
    ValueMap::new()
}

/// AND every condition into `qb`'s WHERE clause, in order.
pub fn where_all<Q: WhereQb>(qb: Q, qxs: impl IntoIterator<Item = Qx>) -> Q {
    qb.where_all(qxs)
}

/// Append every ORDER BY item, in order.
pub fn order_by_columns(qb: SelectQb, obs: impl IntoIterator<Item = OrderBy>) -> SelectQb {
    qb.order_by_columns(obs)
}

/// Merge the maps left to right and set the result. Later maps win on shared columns.
pub fn update_columns(qb: UpdateQb, kws: impl IntoIterator<Item = ValueMap>) -> UpdateQb {
    let merged = kws.into_iter().fold(ValueMap::new(), ValueMap::merge);
    qb.update_columns(merged)
}

/// Replace the select list with the combination of `sxs`.
pub fn select(qb: SelectQb, sxs: impl IntoIterator<Item = Sx>) -> SelectQb {
    qb.select_sx(combine_select_statements(sxs))
}

/// Join column names with `", "`.
pub fn combine_column_names<I>(cols: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    cols.into_iter()
        .map(|c| c.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Flatten several name lists and join them with `", "`.
pub fn combine_name_slices<S: AsRef<str>>(slices: &[&[S]]) -> String {
    slices
        .iter()
        .flat_map(|names| names.iter())
        .map(|n| n.as_ref())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn combine_statements<I>(stmts: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    combine_column_names(stmts)
}

/// `COUNT(*)`, optionally aliased.
pub fn count_stmt(alias: &str) -> String {
    apply_alias("COUNT(*)".to_string(), alias)
}

/// `COUNT(CASE WHEN (cond) THEN 1 END)`, optionally aliased.
pub fn count_case_when_stmt(cond: &str, alias: &str) -> String {
    apply_alias(format!("COUNT(CASE WHEN ({cond}) THEN 1 END)"), alias)
}

/// Conditional count whose condition carries bind values.
pub fn count_case_when_qx_sx(qx: &Qx, alias: &str) -> Sx {
    Sx::new(count_case_when_stmt(qx.qs(), alias), qx.args().to_vec())
}

/// Join select statements with `", "`, arguments concatenated in order.
pub fn combine_select_statements(sxs: impl IntoIterator<Item = Sx>) -> Sx {
    let mut stmts = Vec::new();
    let mut args = Vec::new();
    for sx in sxs {
        let (stmt, sx_args) = sx.into_stmt_args().into_parts();
        stmts.push(stmt);
        args.extend(sx_args);
    }
    Sx::new(stmts.join(", "), args)
}

pub fn left_join(table: impl Into<String>) -> TableJoin {
    TableJoin::left_join(table)
}

pub fn right_join(table: impl Into<String>) -> TableJoin {
    TableJoin::right_join(table)
}

pub fn inner_join(table: impl Into<String>) -> TableJoin {
    TableJoin::inner_join(table)
}

pub fn cross_join(table: impl Into<String>) -> TableJoin {
    TableJoin::cross_join(table)
}
