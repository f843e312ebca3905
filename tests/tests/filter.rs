use tests::{models, models::*, setup, DriverOp, TestDb};

use ormlet::{row, stmt::Value};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

async fn with_cats() -> TestDb {
    let db = setup(&models!(Cat)).await;

    for (name, owner_id) in [("Breakfast", 1_i64), ("Earl", 1), ("Haskell", 2)] {
        let mut cat = Cat::build(&db, row! { "name" => name, "owner_id" => owner_id })
            .await
            .unwrap();
        cat.save(&db).await.unwrap();
    }

    db.log.clear();
    db
}

fn names(cats: &[Cat]) -> Vec<String> {
    cats.iter().map(|cat| cat.name().unwrap().unwrap()).collect()
}

#[tokio::test]
async fn filter_by_one_column() {
    let db = with_cats().await;

    let cats = Cat::filter(&db, row! { "name" => "Earl" }).await.unwrap();
    assert_eq!(names(&cats), ["Earl"]);

    assert_eq!(
        db.log.take(),
        [DriverOp::Exec {
            sql: "SELECT cats.* FROM cats WHERE name = ?".to_string(),
            args: vec![Value::from("Earl")],
        }]
    );
}

#[tokio::test]
async fn filter_by_several_columns_keeps_map_order() {
    let db = with_cats().await;

    let cats = Cat::filter(&db, row! { "owner_id" => 1_i64, "name" => "Breakfast" })
        .await
        .unwrap();
    assert_eq!(names(&cats), ["Breakfast"]);

    let ops = db.log.take();
    assert_eq!(
        ops[0].sql(),
        Some("SELECT cats.* FROM cats WHERE owner_id = ? AND name = ?")
    );
    assert_eq!(ops[0].args(), [Value::I64(1), Value::from("Breakfast")]);
}

#[tokio::test]
async fn empty_filter_is_all() {
    let db = with_cats().await;

    let cats = Cat::filter(&db, row! {}).await.unwrap();
    assert_eq!(names(&cats), ["Breakfast", "Earl", "Haskell"]);

    let all = Cat::all(&db).await.unwrap();
    assert_eq!(names(&all), names(&cats));

    let ops = db.log.take();
    assert_eq!(ops.len(), 2);
    assert_eq!(ops[0].sql(), Some("SELECT cats.* FROM cats"));
    assert_eq!(ops[0], ops[1]);
}

#[tokio::test]
async fn filter_without_matches_is_empty() {
    let db = with_cats().await;

    let cats = Cat::filter(&db, row! { "owner_id" => 3_i64 }).await.unwrap();
    assert!(cats.is_empty());
}

#[tokio::test]
async fn filter_rejects_unknown_columns_before_querying() {
    let db = with_cats().await;

    let err = assert_err!(Cat::filter(&db, row! { "color" => "grey" }).await);
    assert!(err.is_unknown_attribute());
    assert!(db.log.is_empty());
}

#[tokio::test]
async fn values_never_reach_the_sql_text() {
    let db = with_cats().await;

    let hostile = "'; DROP TABLE cats; --";
    let cats = Cat::filter(&db, row! { "name" => hostile }).await.unwrap();
    assert!(cats.is_empty());

    let ops = db.log.take();
    assert!(!ops[0].sql().unwrap().contains("DROP"));
    assert_eq!(ops[0].args(), [Value::from(hostile)]);

    // The table is still there
    assert_eq!(Cat::all(&db).await.unwrap().len(), 3);
}

#[tokio::test]
async fn find_by_any_column() {
    let db = with_cats().await;

    let cat = assert_some!(db.find_by::<Cat>("name", "Haskell").await.unwrap());
    assert_eq!(cat.owner_id().unwrap(), Some(2));

    assert_none!(db.find_by::<Cat>("name", "Tom").await.unwrap());

    let err = assert_err!(db.find_by::<Cat>("color", "grey").await);
    assert!(err.is_unknown_attribute());
}

#[tokio::test]
async fn filter_hydrates_matching_rows() {
    let db = setup(&models!(Cat)).await;
    db.driver()
        .exec(
            "INSERT INTO cats (id, name, owner_id) VALUES (3, 'Haskell', 3)",
            &[],
        )
        .await
        .unwrap();

    let cats = Cat::filter(&db, row! { "name" => "Haskell" }).await.unwrap();

    assert_eq!(cats.len(), 1);
    assert_eq!(cats[0].id().unwrap(), Some(3));
    assert_eq!(cats[0].name().unwrap(), Some("Haskell".to_string()));
    assert_eq!(cats[0].owner_id().unwrap(), Some(3));
}
