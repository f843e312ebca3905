use tests::{models, models::*, setup, DriverOp, TestDb};

use ormlet::{row, stmt::Value, AttributeStore};
use pretty_assertions::assert_eq;
use std_util::prelude::*;

async fn create<M: ormlet::Model>(db: &TestDb, params: ormlet::stmt::Row) -> M {
    let mut instance = db.build::<M>(params).await.unwrap();
    db.save(&mut instance).await.unwrap();
    instance
}

#[tokio::test]
async fn belongs_to_loads_the_owner() {
    let db = setup(&models!(Cat, Human, House)).await;

    let human: Human = create(&db, row! { "fname" => "Jon", "lname" => "Arbuckle" }).await;
    let cat: Cat = create(&db, row! { "name" => "Garfield", "owner_id" => 1_i64 }).await;
    db.log.clear();

    let owner = assert_some!(cat.owner(&db).await.unwrap());
    assert_eq!(owner.fname().unwrap(), human.fname().unwrap());
    assert_eq!(owner.id().unwrap(), Some(1));

    assert_eq!(
        db.log.take(),
        [DriverOp::Exec {
            sql: "SELECT humans.* FROM humans WHERE id = ?".to_string(),
            args: vec![Value::I64(1)],
        }]
    );
}

#[tokio::test]
async fn belongs_to_with_null_key_is_none_without_a_query() {
    let db = setup(&models!(Cat, Human, House)).await;

    let cat: Cat = create(&db, row! { "name" => "Nermal" }).await;
    let cat = assert_some!(Cat::find(&db, cat.id().unwrap().unwrap()).await.unwrap());
    assert_eq!(cat.attribute("owner_id"), Some(&Value::Null));
    db.log.clear();

    assert_none!(cat.owner(&db).await.unwrap());
    assert!(db.log.is_empty());
}

#[tokio::test]
async fn belongs_to_dangling_key_is_none() {
    let db = setup(&models!(Cat, Human, House)).await;

    let cat: Cat = create(&db, row! { "name" => "Garfield", "owner_id" => 99_i64 }).await;

    assert_none!(cat.owner(&db).await.unwrap());
}

#[tokio::test]
async fn has_many_loads_every_match_in_order() {
    let db = setup(&models!(Cat, Human, House)).await;

    let jon: Human = create(&db, row! { "fname" => "Jon" }).await;
    let liz: Human = create(&db, row! { "fname" => "Liz" }).await;

    for (name, owner) in [("Garfield", 1_i64), ("Nermal", 2), ("Arlene", 1)] {
        let _: Cat = create(&db, row! { "name" => name, "owner_id" => owner }).await;
    }
    db.log.clear();

    let names: Vec<_> = jon
        .cats(&db)
        .await
        .unwrap()
        .iter()
        .map(|cat| cat.name().unwrap().unwrap())
        .collect();
    assert_eq!(names, ["Garfield", "Arlene"]);

    assert_eq!(
        db.log.take(),
        [DriverOp::Exec {
            sql: "SELECT cats.* FROM cats WHERE owner_id = ?".to_string(),
            args: vec![Value::I64(1)],
        }]
    );

    assert_eq!(liz.cats(&db).await.unwrap().len(), 1);
}

#[tokio::test]
async fn has_many_without_matches_is_empty() {
    let db = setup(&models!(Cat, Human, House)).await;

    let human: Human = create(&db, row! { "fname" => "Jon" }).await;
    assert!(human.cats(&db).await.unwrap().is_empty());

    let unsaved = Human::build(&db, row! { "fname" => "Liz" }).await.unwrap();
    db.log.clear();

    assert!(unsaved.cats(&db).await.unwrap().is_empty());
    assert!(db.log.is_empty());
}

#[tokio::test]
async fn has_one_through_joins_both_hops() {
    let db = setup(&models!(Cat, Human, House)).await;

    let _: House = create(&db, row! { "address" => "711 Maple St" }).await;
    let _: Human = create(&db, row! { "fname" => "Jon", "house_id" => 1_i64 }).await;
    let cat: Cat = create(&db, row! { "name" => "Garfield", "owner_id" => 1_i64 }).await;
    db.log.clear();

    let home = assert_some!(cat.home(&db).await.unwrap());
    assert_eq!(home.address().unwrap(), Some("711 Maple St".to_string()));
    assert_eq!(home.id().unwrap(), Some(1));

    assert_eq!(
        db.log.take(),
        [DriverOp::Exec {
            sql: "SELECT houses.* FROM humans JOIN houses ON humans.house_id = houses.id WHERE humans.id = ?"
                .to_string(),
            args: vec![Value::I64(1)],
        }]
    );
}

#[tokio::test]
async fn has_one_through_missing_hop_is_none() {
    let db = setup(&models!(Cat, Human, House)).await;

    // Owner exists but has no house
    let _: Human = create(&db, row! { "fname" => "Jon" }).await;
    let cat: Cat = create(&db, row! { "name" => "Garfield", "owner_id" => 1_i64 }).await;
    assert_none!(cat.home(&db).await.unwrap());

    // No owner at all
    let stray: Cat = create(&db, row! { "name" => "Nermal" }).await;
    db.log.clear();
    assert_none!(stray.home(&db).await.unwrap());
    assert!(db.log.is_empty());
}

#[tokio::test]
async fn traversal_before_targets_are_registered_fails() {
    let db = setup(&models!(Cat)).await;

    let cat: Cat = create(&db, row! { "name" => "Garfield", "owner_id" => 1_i64 }).await;

    let err = assert_err!(cat.home(&db).await);
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "cannot traverse `Cat::home`: configuration error: model `Human` is not registered"
    );

    let err = assert_err!(cat.owner(&db).await);
    assert!(err.is_configuration());

    db.register::<Human>().await.unwrap();

    // The source hop's target is still missing
    let err = assert_err!(cat.home(&db).await);
    assert_eq!(
        err.to_string(),
        "cannot traverse `Cat::home`: configuration error: model `House` is not registered"
    );

    db.register::<House>().await.unwrap();

    let _: House = create(&db, row! { "address" => "711 Maple St" }).await;
    let _: Human = create(&db, row! { "fname" => "Jon", "house_id" => 1_i64 }).await;

    let home = assert_some!(cat.home(&db).await.unwrap());
    assert_eq!(home.address().unwrap(), Some("711 Maple St".to_string()));
}

#[tokio::test]
async fn target_type_must_match_the_declaration() {
    let db = setup(&models!(Cat, Human, House)).await;

    let cat: Cat = create(&db, row! { "name" => "Garfield", "owner_id" => 1_i64 }).await;

    let err = assert_err!(db.belongs_to::<Cat, House>(&cat, "owner").await);
    assert!(err.is_configuration());
    assert_eq!(
        err.to_string(),
        "configuration error: `Cat::owner` refers to `Human`, which is not `House`"
    );

    let err = assert_err!(db.belongs_to::<Cat, Human>(&cat, "whiskers").await);
    assert_eq!(
        err.to_string(),
        "configuration error: `Cat` has no association named `whiskers`"
    );

    let err = assert_err!(db.has_many::<Cat, Human>(&cat, "owner").await);
    assert_eq!(
        err.to_string(),
        "configuration error: `Cat::owner` is declared as belongs_to, not has_many"
    );
}

#[tokio::test]
async fn house_residents_use_the_owner_foreign_key() {
    let db = setup(&models!(Cat, Human, House)).await;

    let house: House = create(&db, row! { "address" => "711 Maple St" }).await;
    let _: Human = create(&db, row! { "fname" => "Jon", "house_id" => 1_i64 }).await;
    let _: Human = create(&db, row! { "fname" => "Liz", "house_id" => 1_i64 }).await;
    let _: Human = create(&db, row! { "fname" => "Odie" }).await;

    let residents = house.residents(&db).await.unwrap();
    let names: Vec<_> = residents
        .iter()
        .map(|human| human.fname().unwrap().unwrap())
        .collect();
    assert_eq!(names, ["Jon", "Liz"]);
}

#[derive(Debug, ormlet::Model)]
#[primary_key = "code"]
#[column(code: i64, label: String)]
struct Breed {
    attributes: AttributeStore,
}

#[derive(Debug, ormlet::Model)]
#[primary_key = "number"]
#[column(number: i64, breed_code: i64)]
#[belongs_to(breed, foreign_key = "breed_code")]
struct Kennel {
    attributes: AttributeStore,
}

#[derive(Debug, ormlet::Model)]
#[column(id: i64, name: String, breed_id: i64, kennel_number: i64)]
#[belongs_to(breed)]
#[belongs_to(kennel, foreign_key = "kennel_number")]
#[has_one_through(kennel_breed, through = kennel, source = breed)]
struct Pet {
    attributes: AttributeStore,
}

async fn setup_kennels() -> TestDb {
    let db = setup(&models!()).await;

    for sql in [
        "CREATE TABLE breeds (code INTEGER PRIMARY KEY, label VARCHAR(255))",
        "CREATE TABLE kennels (number INTEGER PRIMARY KEY, breed_code INTEGER)",
        "CREATE TABLE pets (id INTEGER PRIMARY KEY, name VARCHAR(255), breed_id INTEGER, kennel_number INTEGER)",
    ] {
        db.driver().exec(sql, &[]).await.unwrap();
    }

    db.register::<Breed>().await.unwrap();
    db.register::<Kennel>().await.unwrap();
    db.register::<Pet>().await.unwrap();
    db
}

#[tokio::test]
async fn belongs_to_defaults_to_the_target_primary_key() {
    let db = setup_kennels().await;

    let _: Breed = create(&db, row! { "label" => "Beagle" }).await;
    let breed: Breed = create(&db, row! { "label" => "Basset" }).await;
    assert_eq!(breed.code().unwrap(), Some(2));

    let pet: Pet = create(&db, row! { "name" => "Odie", "breed_id" => 2_i64 }).await;
    db.log.clear();

    let loaded = assert_some!(pet.breed(&db).await.unwrap());
    assert_eq!(loaded.label().unwrap(), Some("Basset".to_string()));

    assert_eq!(
        db.log.take(),
        [DriverOp::Exec {
            sql: "SELECT breeds.* FROM breeds WHERE code = ?".to_string(),
            args: vec![Value::I64(2)],
        }]
    );
}

#[tokio::test]
async fn has_one_through_uses_each_target_primary_key() {
    let db = setup_kennels().await;

    let _: Breed = create(&db, row! { "label" => "Beagle" }).await;
    let _: Kennel = create(&db, row! { "breed_code" => 1_i64 }).await;
    let pet: Pet = create(&db, row! { "name" => "Odie", "kennel_number" => 1_i64 }).await;
    db.log.clear();

    let breed = assert_some!(pet.kennel_breed(&db).await.unwrap());
    assert_eq!(breed.label().unwrap(), Some("Beagle".to_string()));

    assert_eq!(
        db.log.take(),
        [DriverOp::Exec {
            sql: "SELECT breeds.* FROM kennels JOIN breeds ON kennels.breed_code = breeds.code WHERE kennels.number = ?"
                .to_string(),
            args: vec![Value::I64(1)],
        }]
    );
}
