use super::*;
use sea_orm::EntityTrait;

/// Tests that deleting a class removes its open reservations.
///
/// Expected: Ok(true) and no reservation rows remain for the class
#[tokio::test]
async fn deletes_class_and_cascades_reservations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    factory::create_reservation(db, "student@example.com", &class).await?;

    let deleted = ClassRepository::new(db).delete(class.id).await?;

    assert!(deleted);
    let remaining = entity::prelude::Reservation::find().all(db).await?;
    assert!(remaining.is_empty());

    Ok(())
}

/// Tests deleting a class that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = ClassRepository::new(db).delete(42).await?;

    assert!(!deleted);

    Ok(())
}
