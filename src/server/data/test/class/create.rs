use super::*;

/// Tests that a new class starts with every seat available.
///
/// Expected: Ok with available_seats equal to capacity
#[tokio::test]
async fn creates_class_with_full_availability() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = ClassRepository::new(db)
        .create(CreateClassParam {
            instructor_email: "instructor@example.com".to_string(),
            instructor_name: Some("Teacher".to_string()),
            title: "Pottery".to_string(),
            capacity: 12,
            price: 1500,
        })
        .await?;

    assert_eq!(class.capacity, 12);
    assert_eq!(class.available_seats, 12);
    assert_eq!(class.price, 1500);
    assert_eq!(class.instructor_email, "instructor@example.com");

    Ok(())
}

/// Tests listing classes of one instructor.
///
/// Expected: Ok with only that instructor's classes
#[tokio::test]
async fn lists_classes_by_instructor() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::ClassFactory::new(db)
        .instructor_email("a@example.com")
        .build()
        .await?;
    factory::class::ClassFactory::new(db)
        .instructor_email("a@example.com")
        .build()
        .await?;
    factory::class::ClassFactory::new(db)
        .instructor_email("b@example.com")
        .build()
        .await?;

    let classes = ClassRepository::new(db)
        .get_by_instructor("a@example.com")
        .await?;

    assert_eq!(classes.len(), 2);
    assert!(classes.iter().all(|c| c.instructor_email == "a@example.com"));

    Ok(())
}
