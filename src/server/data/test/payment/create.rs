use super::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

/// Tests recording a payment with its consumed reservations.
///
/// Expected: Ok with one item per reservation
#[tokio::test]
async fn records_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let reservation =
        Reservation::from_entity(factory::create_reservation(db, "s@example.com", &class).await?);

    let repo = PaymentRepository::new(db);
    let payment = repo
        .create(param("s@example.com", reservation.price), &[reservation.clone()])
        .await?;

    assert_eq!(payment.reservation_ids, vec![reservation.id]);
    assert_eq!(payment.amount, reservation.price);
    let items = entity::prelude::PaymentItem::find()
        .filter(entity::payment_item::Column::ReservationId.eq(reservation.id))
        .all(db)
        .await?;
    assert_eq!(items.len(), 1);

    Ok(())
}

/// Tests that a reservation cannot appear in two payments.
///
/// Expected: Err from the unique reservation_id column
#[tokio::test]
async fn rejects_second_settlement_of_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let reservation =
        Reservation::from_entity(factory::create_reservation(db, "s@example.com", &class).await?);

    let repo = PaymentRepository::new(db);
    repo.create(param("s@example.com", 500), &[reservation.clone()])
        .await?;
    let result = repo
        .create(param("s@example.com", 500), &[reservation])
        .await;

    assert!(result.is_err());

    Ok(())
}
