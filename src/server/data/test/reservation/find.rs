use super::*;

/// Tests that lookups by id skip unknown ids.
///
/// Expected: Ok with only the existing reservation
#[tokio::test]
async fn finds_existing_ids_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let reservation = factory::create_reservation(db, "student@example.com", &class).await?;

    let found = ReservationRepository::new(db)
        .find_by_ids(&[reservation.id, reservation.id + 100])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, reservation.id);

    Ok(())
}

/// Tests listing only the requested student's reservations.
///
/// Expected: Ok with one reservation for the student
#[tokio::test]
async fn finds_by_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    factory::create_reservation(db, "a@example.com", &class).await?;
    factory::create_reservation(db, "b@example.com", &class).await?;

    let repo = ReservationRepository::new(db);
    let found = repo.find_by_student("a@example.com").await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].student_email, "a@example.com");
    assert!(repo
        .find_by_student_and_class("b@example.com", class.id)
        .await?
        .is_some());

    Ok(())
}
