use super::*;

/// Tests that a reservation stores the title and price it was given.
///
/// Expected: Ok with the snapshot fields preserved
#[tokio::test]
async fn stores_snapshot() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;

    let reservation = ReservationRepository::new(db)
        .create(CreateReservationParam {
            student_email: "student@example.com".to_string(),
            class_id: class.id,
            class_title: class.title.clone(),
            price: class.price,
        })
        .await?;

    assert_eq!(reservation.class_id, class.id);
    assert_eq!(reservation.class_title, class.title);
    assert_eq!(reservation.price, class.price);

    Ok(())
}

/// Tests that the same student cannot select the same class twice.
///
/// Expected: Err from the unique (student_email, class_id) index
#[tokio::test]
async fn rejects_duplicate_selection() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let repo = ReservationRepository::new(db);
    let param = CreateReservationParam {
        student_email: "student@example.com".to_string(),
        class_id: class.id,
        class_title: class.title.clone(),
        price: class.price,
    };

    repo.create(param.clone()).await?;
    let result = repo.create(param).await;

    assert!(result.is_err());

    Ok(())
}
