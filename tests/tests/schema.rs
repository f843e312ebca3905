use tests::{models, models::*, setup, try_setup};

use ormlet::{row, AttributeStore, Db, Model};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

#[derive(Debug, ormlet::Model)]
struct Dog {
    attributes: AttributeStore,
}

#[derive(Debug, ormlet::Model)]
#[column(name: String)]
struct Feline {
    attributes: AttributeStore,
}

#[derive(Debug, ormlet::Model)]
#[table = "cats"]
#[column(name: String, color: String)]
struct Tabby {
    attributes: AttributeStore,
}

mod other {
    use ormlet::AttributeStore;

    #[derive(Debug, ormlet::Model)]
    #[table = "humans"]
    pub struct Cat {
        attributes: AttributeStore,
    }
}

#[tokio::test]
async fn columns_are_discovered_in_table_order() {
    let db = setup(&models!(Cat, Human, House)).await;

    assert_eq!(db.columns::<Cat>().await.unwrap().columns, ["id", "name", "owner_id"]);
    assert_eq!(
        db.columns::<Human>().await.unwrap().columns,
        ["id", "fname", "lname", "house_id"]
    );
    assert_eq!(db.log.discoveries(), ["cats", "humans", "houses"]);
}

#[tokio::test]
async fn missing_table_is_a_schema_error_and_is_retried() {
    let db = setup(&models!()).await;

    let err = assert_err!(db.register::<Dog>().await);
    assert!(err.is_schema());
    assert_eq!(
        err.to_string(),
        "schema error: table `dogs` for model `Dog` does not exist"
    );

    db.driver()
        .exec("CREATE TABLE dogs (id INTEGER PRIMARY KEY, name VARCHAR(255))", &[])
        .await
        .unwrap();

    db.register::<Dog>().await.unwrap();
    assert_eq!(db.log.discoveries(), ["dogs", "dogs"]);
    assert_eq!(db.model_by_name("Dog"), Some(Dog::model_type()));
}

#[tokio::test]
async fn discovery_runs_once_per_type() {
    let db = setup(&models!()).await;

    let mut handles = vec![];
    for _ in 0..8 {
        let db: Db = db.db.clone();
        handles.push(tokio::spawn(async move { db.columns::<Cat>().await }));
    }

    for handle in handles {
        let schema = handle.await.unwrap().unwrap();
        assert_eq!(schema.table_name, "cats");
    }

    Cat::all(&db).await.unwrap();
    Cat::build(&db, row! { "name" => "Earl" }).await.unwrap();

    assert_eq!(db.log.discoveries(), ["cats"]);
}

#[tokio::test]
async fn set_table_name_before_first_use() {
    let db = setup(&models!()).await;

    assert_eq!(db.table_name::<Feline>(), "felines");
    db.set_table_name::<Feline>("cats");
    assert_eq!(db.table_name::<Feline>(), "cats");

    db.register::<Feline>().await.unwrap();

    let mut feline = Feline::build(&db, row! { "name" => "Earl" }).await.unwrap();
    feline.save(&db).await.unwrap();

    let cat = assert_some!(Cat::find(&db, 1).await.unwrap());
    assert_eq!(cat.name().unwrap(), Some("Earl".to_string()));
}

#[tokio::test]
async fn table_name_prefix_applies_to_inferred_names_only() {
    let mut builder = models!(Human);
    builder.table_name_prefix("pet_");
    let db = setup(&builder).await;

    assert_eq!(db.table_name::<Human>(), "humans");
    assert_eq!(db.table_name::<Cat>(), "pet_cats");

    let err = assert_err!(db.register::<Cat>().await);
    assert_eq!(
        err.to_string(),
        "schema error: table `pet_cats` for model `Cat` does not exist"
    );
}

#[tokio::test]
async fn typed_accessors_must_name_discovered_columns() {
    let err = assert_err!(try_setup(&models!(Tabby)).await);

    assert!(err.is_unknown_attribute());
    assert_eq!(err.to_string(), "unknown attribute `color` for model `Tabby`");
}

#[tokio::test]
async fn registering_is_idempotent_per_type() {
    let db = setup(&models!(Cat)).await;

    db.register::<Cat>().await.unwrap();
    assert_eq!(db.log.discoveries(), ["cats"]);

    let err = assert_err!(db.register::<other::Cat>().await);
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "configuration error: another model is already registered as `Cat`"
    );
}
