use super::*;

/// Tests that a student can only withdraw their own reservation.
///
/// Expected: Ok(false) for another student, Ok(true) for the owner
#[tokio::test]
async fn deletes_only_owned_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let reservation = factory::create_reservation(db, "owner@example.com", &class).await?;

    let repo = ReservationRepository::new(db);

    assert!(!repo.delete_owned(reservation.id, "other@example.com").await?);
    assert!(repo.delete_owned(reservation.id, "owner@example.com").await?);
    assert!(repo.find_by_ids(&[reservation.id]).await?.is_empty());

    Ok(())
}

/// Tests bulk deletion reporting the number of removed rows.
///
/// Expected: Ok(2) when one of three ids is unknown
#[tokio::test]
async fn counts_removed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class_a = factory::create_class(db).await?;
    let class_b = factory::create_class(db).await?;
    let r1 = factory::create_reservation(db, "s@example.com", &class_a).await?;
    let r2 = factory::create_reservation(db, "s@example.com", &class_b).await?;

    let removed = ReservationRepository::new(db)
        .delete_many(&[r1.id, r2.id, r2.id + 50])
        .await?;

    assert_eq!(removed, 2);

    Ok(())
}
