use super::*;
use crate::qb::Expr;
use crate::stmt::StmtArgsTuple;
use crate::value_map::SetValue;

const NAME: Column<String> = Column::from_static("name");
const RANK: Column<i32> = Column::from_static("rank");

#[test]
fn test_comparisons() {
    assert_eq!(NAME.eq("a".to_string()), ("name=?".to_string(), "a".to_string()));
    assert_eq!(NAME.ne("a".to_string()).0, "name!=?");
    assert_eq!(RANK.gt(1), ("rank>?".to_string(), 1));
    assert_eq!(RANK.gte(1).0, "rank>=?");
    assert_eq!(RANK.lt(1).0, "rank<?");
    assert_eq!(RANK.lte(1).0, "rank<=?");
    assert_eq!(RANK.op("%", 2), ("rank %".to_string(), 2));
    assert_eq!(RANK.qs("= 1"), "rank = 1");
}

#[test]
fn test_in_list_binds_one_array() {
    let (stmt, xs) = RANK.in_list(vec![1, 2, 3]);
    assert_eq!(stmt, "rank = ANY(?)");
    assert_eq!(xs, vec![1, 2, 3]);

    let (stmt, xs) = RANK.not_in(Vec::new());
    assert_eq!(stmt, "rank <> ALL(?)");
    assert!(xs.is_empty());
}

#[test]
fn test_pattern_and_null_checks() {
    assert_eq!(NAME.like("a%".to_string()).0, "name LIKE ?");
    assert_eq!(NAME.not_like("a%".to_string()).0, "name NOT LIKE ?");
    assert_eq!(NAME.ilike("a%".to_string()).0, "name ILIKE ?");
    assert_eq!(NAME.not_ilike("a%".to_string()).0, "name NOT ILIKE ?");
    assert_eq!(NAME.is_null(), "name IS NULL");
    assert_eq!(NAME.is_not_null(), "name IS NOT NULL");

    let active: Column<bool> = Column::new("active");
    assert_eq!(active.is_true(), "active IS TRUE");
    assert_eq!(active.is_false(), "active IS FALSE");
}

#[test]
fn test_between() {
    assert_eq!(
        RANK.between(1, 9),
        ("rank BETWEEN ? AND ?".to_string(), 1, 9)
    );
    assert_eq!(RANK.not_between(1, 9).0, "rank NOT BETWEEN ? AND ?");
}

#[test]
fn test_column_to_column() {
    let other: Column<i32> = Column::new("b.rank");
    assert_eq!(RANK.on_eq(&other), "rank=b.rank");
    assert_eq!(RANK.on_ne(&other), "rank!=b.rank");
}

#[test]
fn test_alias() {
    assert_eq!(NAME.as_alias("n"), "name as n");
    assert_eq!(NAME.as_alias(""), "name");
    let label: Column<String> = Column::new("label");
    assert_eq!(NAME.as_name(&label), "name as label");
}

#[test]
fn test_safe_cnm() {
    assert_eq!(NAME.safe_cnm("").name(), " name ");
    assert_eq!(NAME.safe_cnm("`").name(), "`name`");
    assert_eq!(NAME.safe_cnm("[]").name(), "[name]");
    assert_eq!(NAME.safe_cnm("<<>>").name(), "\"name\"");
    // two characters, four bytes
    assert_eq!(NAME.safe_cnm("«»").name(), "«name»");
}

#[test]
fn test_order_items() {
    assert_eq!(RANK.desc().orders(), "rank DESC");
    assert_eq!(RANK.asc().orders(), "rank ASC");
    assert_eq!(RANK.ob("DESC NULLS LAST").orders(), "rank DESC NULLS LAST");
    assert_eq!(RANK.desc().ob(&NAME.asc()).orders(), "rank DESC , name ASC");
}

#[test]
fn test_qc_and_qx() {
    assert_eq!(NAME.qc("IS NOT NULL").qs(), "name IS NOT NULL");

    let qx = RANK.qx("> ?", 10);
    assert_eq!(qx.qs(), "rank > ?");
    assert_eq!(qx.args().len(), 1);
}

#[test]
fn test_update_pairs() {
    assert_eq!(RANK.kv(5), ("rank".to_string(), 5));

    let (col, expr) = RANK.ke_add(1);
    assert_eq!(col, "rank");
    assert_eq!(expr.to_sql().0, "rank + $1");
    assert_eq!(RANK.expr_sub(1).to_sql().0, "rank - $1");
    assert_eq!(RANK.expr_mul(1).to_sql().0, "rank * $1");
    assert_eq!(RANK.expr_div(1).to_sql().0, "rank / $1");
    assert_eq!(NAME.expr_concat("!".into()).to_sql().0, "CONCAT(name, $1)");
    assert_eq!(
        NAME.ke_replace("a".into(), "b".into()).1.to_sql().0,
        "REPLACE(name, $1, $2)"
    );

    let (col, expr) = NAME.ke_exp(Expr::raw("UPPER(name)"));
    assert_eq!(col, "name");
    assert_eq!(expr.to_sql().0, "UPPER(name)");
}

#[test]
fn test_kw_chains_into_value_map() {
    let map = RANK.kw(1).kw("name", "x".to_string()).ke(RANK.ke_add(2));
    assert_eq!(map.columns(), vec!["rank", "name"]);
    assert!(matches!(map.get("rank"), Some(SetValue::Expr(_))));
    assert!(matches!(map.get("name"), Some(SetValue::Value(_))));
}

#[test]
fn test_aggregates() {
    assert_eq!(RANK.count(""), "COUNT(rank)");
    assert_eq!(RANK.count("n"), "COUNT(rank) as n");
    assert_eq!(RANK.count_distinct("n"), "COUNT(DISTINCT(rank)) as n");
    assert_eq!(
        RANK.coalesce().sum_stmt("total"),
        "COALESCE(SUM(rank), 0) as total"
    );
    assert_eq!(RANK.ifnull().max_stmt(""), "IFNULL(MAX(rank), 0)");
}

#[test]
fn test_table_qualification() {
    assert_eq!(RANK.tn("t").name(), "t.rank");
    assert_eq!(RANK.with_table("t").name(), "t.rank");
    assert_eq!(RANK.with_table(&String::from("u")).name(), "u.rank");
}

#[test]
fn test_identity_traits() {
    let a: Column<i32> = column("rank");
    assert_eq!(a, RANK);
    assert_ne!(a, Column::new("other"));
    assert_eq!(a.to_string(), "rank");
    assert_eq!(format!("{a:?}"), "Column(\"rank\")");
    assert_eq!(a.as_ref(), "rank");

    let mut set = std::collections::HashSet::new();
    set.insert(a.clone());
    assert!(set.contains(&RANK));
}

#[test]
fn test_cnm_infers_type_from_sample() {
    let sample = 0i64;
    let id = cnm(&sample, "id");
    let (stmt, value): (String, i64) = id.eq(7);
    assert_eq!(stmt, "id=?");
    assert_eq!(value, 7);
}
