//! Tests for `#[derive(Columns)]` and `#[derive(FromRow)]`.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use pgcnm::prelude::*;
use pgcnm::{TableColumn, ops};
use uuid::Uuid;

#[derive(Debug, Columns, FromRow)]
#[orm(table = "examples")]
struct Example {
    id: Uuid,
    name: String,
    #[orm(column = "type")]
    kind: String,
    rank: i32,
    deleted_at: Option<DateTime<Utc>>,
    #[orm(skip)]
    cache: Vec<u8>,
}

#[derive(Columns)]
struct UserProfile {
    user_id: i64,
    r#type: String,
}

#[test]
fn test_table_names() {
    assert_eq!(Example::TABLE, "examples");
    assert_eq!(ExampleColumns::TABLE, "examples");
    assert_eq!(UserProfile::TABLE, "user_profile");
    assert_eq!(Example::columns().table_name(), "examples");
}

#[test]
fn test_column_names() {
    let c = Example::columns();
    assert_eq!(c.kind.name(), "type");
    assert_eq!(c.deleted_at.name(), "deleted_at");
    assert_eq!(
        ExampleColumns::NAMES,
        &["id", "name", "type", "rank", "deleted_at"]
    );
    assert_eq!(UserProfileColumns::COLUMNS.r#type.name(), "type");
}

#[test]
fn test_columns_are_typed() {
    let c = Example::columns();
    let (stmt, rank): (String, i32) = c.rank.gt(10);
    assert_eq!(stmt, "rank>?");
    assert_eq!(rank, 10);

    let (stmt, id): (String, Uuid) = c.id.eq(Uuid::nil());
    assert_eq!(stmt, "id=?");
    assert!(id.is_nil());

    assert_eq!(c.deleted_at.is_null(), "deleted_at IS NULL");
}

#[test]
fn test_columns_drive_a_query() {
    let c = Example::columns();
    let (sql, params) = qb::select(Example::TABLE)
        .select(ops::combine_column_names([&c.name, &c.kind]))
        .and_where(c.kind.eq("x".to_string()))
        .and_where(c.deleted_at.is_null())
        .order(c.rank.desc())
        .build();
    assert_eq!(
        sql,
        "SELECT name, type FROM examples WHERE type=$1 AND deleted_at IS NULL ORDER BY rank DESC"
    );
    assert_eq!(params.len(), 1);
}

#[test]
fn test_with_table_uses_derived_table_name() {
    let c = Example::columns();
    let qualified: TableColumn<i32> = c.rank.with_table(&c);
    assert_eq!(qualified.name(), "examples.rank");

    let p = UserProfileColumns::COLUMNS;
    let on = p.user_id.with_table(&p).eq(&Column::<i64>::new("id").tn("users"));
    assert_eq!(on, "user_profile.user_id = users.id");
}

#[test]
fn test_columns_in_const_position() {
    const C: ExampleColumns = ExampleColumns::COLUMNS;
    assert_eq!(C.name.to_string(), "name");
    assert_eq!(C, Example::columns());
}
