//! Round trips against a real PostgreSQL server.
//!
//! Set `DATABASE_URL` (directly or in `.env`) to run these; without it every test
//! returns early.

use pgcnm::prelude::*;
use pgcnm::ops;
use tokio_postgres::{Client, NoTls};

#[derive(Debug, Columns, FromRow)]
#[orm(table = "pgcnm_live_examples")]
struct Example {
    id: i64,
    name: String,
    #[orm(column = "type")]
    kind: String,
    rank: i32,
    meta: serde_json::Value,
}

async fn connect(test: &str) -> CnmResult<Option<Client>> {
    let _ = dotenvy::dotenv();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("DATABASE_URL is not set; skipping {test}");
            return Ok(None);
        }
    };

    let (client, connection) = tokio_postgres::connect(&database_url, NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            eprintln!("connection error: {e}");
        }
    });
    Ok(Some(client))
}

async fn setup(client: &Client) -> CnmResult<()> {
    client
        .batch_execute(
            "CREATE TEMP TABLE pgcnm_live_examples (
                id BIGINT PRIMARY KEY,
                name TEXT NOT NULL,
                type TEXT NOT NULL,
                rank INT NOT NULL,
                meta JSONB NOT NULL DEFAULT '{}'
            );
            INSERT INTO pgcnm_live_examples (id, name, type, rank, meta) VALUES
                (1, 'abc', 'xyz', 123, '{\"tags\": [\"a\", \"b\"], \"owner\": {\"age\": 40}}'),
                (2, 'aaa', 'xyz', 456, '{\"tags\": []}'),
                (3, 'bbb', 'uvw', 789, '{}');",
        )
        .await?;
    Ok(())
}

#[tokio::test]
async fn select_with_column_fragments() -> CnmResult<()> {
    let Some(client) = connect("select_with_column_fragments").await? else {
        return Ok(());
    };
    setup(&client).await?;
    let c = Example::columns();

    let rows: Vec<Example> = qb::select(Example::TABLE)
        .and_where(Qx::from(c.name.eq("abc".to_string())).or([Qx::from(c.name.eq("aaa".to_string()))]))
        .and_where(c.kind.eq("xyz".to_string()))
        .order(c.rank.desc())
        .fetch_all(&client)
        .await?;
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["aaa", "abc"]);

    let (name, rank): (String, i32) = qb::select(Example::TABLE)
        .select(ops::combine_column_names([c.name.name(), c.rank.name()]))
        .and_where(c.id.in_list(vec![3]))
        .fetch_one(&client)
        .await?;
    assert_eq!((name.as_str(), rank), ("bbb", 789));

    let total = qb::select(Example::TABLE)
        .and_where(c.rank.between(100, 500))
        .count(&client)
        .await?;
    assert_eq!(total, 2);
    Ok(())
}

#[tokio::test]
async fn aggregates_and_json() -> CnmResult<()> {
    let Some(client) = connect("aggregates_and_json").await? else {
        return Ok(());
    };
    setup(&client).await?;
    let c = Example::columns();

    let (sum, adults): (i64, i64) = qb::select(Example::TABLE)
        .select_sx(
            Sx::from(c.rank.coalesce().sum_stmt("total"))
                .combine([ops::count_case_when_qx_sx(&c.rank.qx("> ?", 200), "big")]),
        )
        .fetch_one(&client)
        .await?;
    assert_eq!(sum, 123 + 456 + 789);
    assert_eq!(adults, 2);

    let ids: Vec<(i64,)> = qb::select(Example::TABLE)
        .select(c.id.name())
        .and_where(c.meta.json().get_int("owner.age").gte(18))
        .fetch_all(&client)
        .await?;
    assert_eq!(ids, vec![(1,)]);

    let (len,): (i32,) = qb::select(Example::TABLE)
        .select(c.meta.json().length("tags").name())
        .and_where(c.id.eq(1))
        .fetch_one(&client)
        .await?;
    assert_eq!(len, 2);
    Ok(())
}

#[tokio::test]
async fn update_and_delete() -> CnmResult<()> {
    let Some(client) = connect("update_and_delete").await? else {
        return Ok(());
    };
    setup(&client).await?;
    let c = Example::columns();

    let affected = qb::update(Example::TABLE)
        .update_columns(
            c.rank
                .kw(0)
                .ke(c.rank.ke_add(1))
                .ke(c.name.ke_replace("a".to_string(), "A".to_string())),
        )
        .and_where(c.kind.eq("xyz".to_string()))
        .execute(&client)
        .await?;
    assert_eq!(affected, 2);

    let (name, rank): (String, i32) = qb::select(Example::TABLE)
        .select("name, rank")
        .and_where(c.id.eq(1))
        .fetch_one(&client)
        .await?;
    assert_eq!((name.as_str(), rank), ("Abc", 124));

    // no WHERE: nothing is deleted
    assert_eq!(qb::delete(Example::TABLE).execute(&client).await?, 0);

    let deleted = qb::delete(Example::TABLE)
        .and_where(c.id.not_in(vec![1]))
        .execute(&client)
        .await?;
    assert_eq!(deleted, 2);

    let missing = qb::select(Example::TABLE)
        .and_where(c.id.eq(99))
        .fetch_one::<Example>(&client)
        .await;
    assert!(matches!(missing, Err(e) if e.is_not_found()));
    Ok(())
}

#[tokio::test]
async fn binding_a_condition_is_not_executable() -> CnmResult<()> {
    let Some(client) = connect("binding_a_condition_is_not_executable").await? else {
        return Ok(());
    };
    let cond = Qx::from(Column::<i32>::new("rank").eq(1));

    let res = GenericClient::query(&client, "SELECT $1::text", &[&cond]).await;
    assert!(matches!(res, Err(e) if e.is_not_executable()));

    let res = GenericClient::execute(&client, "SELECT $1::int4", &[&cond.qs().to_string()]).await;
    assert!(matches!(res, Err(CnmError::Query(_))));
    Ok(())
}
