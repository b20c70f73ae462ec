use super::*;

/// Tests that payment history lists the student's payments newest first.
///
/// Expected: Ok with the later payment first and no foreign payments
#[tokio::test]
async fn lists_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let first =
        Reservation::from_entity(factory::create_reservation(db, "s@example.com", &class).await?);
    let other = factory::create_class(db).await?;
    let second =
        Reservation::from_entity(factory::create_reservation(db, "s@example.com", &other).await?);
    let foreign =
        Reservation::from_entity(factory::create_reservation(db, "x@example.com", &class).await?);

    let repo = PaymentRepository::new(db);
    let older = repo.create(param("s@example.com", 500), &[first]).await?;
    let newer = repo.create(param("s@example.com", 500), &[second]).await?;
    repo.create(param("x@example.com", 500), &[foreign]).await?;

    let history = repo.get_by_student("s@example.com").await?;

    assert_eq!(
        history.iter().map(|p| p.id).collect::<Vec<_>>(),
        vec![newer.id, older.id]
    );
    assert_eq!(history[0].reservation_ids.len(), 1);

    Ok(())
}
