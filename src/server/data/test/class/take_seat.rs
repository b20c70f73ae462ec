use super::*;

/// Tests consuming a seat from a class with seats left.
///
/// Expected: Taken and the counter drops by one
#[tokio::test]
async fn takes_available_seat() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::ClassFactory::new(db).capacity(2).build().await?;

    let repo = ClassRepository::new(db);
    let outcome = repo.take_seat(class.id).await?;

    assert_eq!(outcome, SeatDecrement::Taken);
    assert_eq!(repo.find_by_id(class.id).await?.unwrap().available_seats, 1);

    Ok(())
}

/// Tests that the counter never goes below zero.
///
/// Expected: SoldOut and the counter stays at 0
#[tokio::test]
async fn refuses_when_sold_out() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::ClassFactory::new(db)
        .capacity(1)
        .available_seats(0)
        .build()
        .await?;

    let repo = ClassRepository::new(db);
    let outcome = repo.take_seat(class.id).await?;

    assert_eq!(outcome, SeatDecrement::SoldOut);
    assert_eq!(repo.find_by_id(class.id).await?.unwrap().available_seats, 0);

    Ok(())
}

/// Tests taking a seat of a class that does not exist.
///
/// Expected: Missing
#[tokio::test]
async fn reports_missing_class() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let outcome = ClassRepository::new(db).take_seat(7).await?;

    assert_eq!(outcome, SeatDecrement::Missing);

    Ok(())
}
