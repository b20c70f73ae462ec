use test_utils::builder::TestBuilder;

use crate::server::{
    error::AppError, model::class::CreateClassParam, service::class::ClassService,
};

fn param(capacity: i32, price: i64) -> CreateClassParam {
    CreateClassParam {
        instructor_email: "instructor@example.com".to_string(),
        instructor_name: None,
        title: "Yoga".to_string(),
        capacity,
        price,
    }
}

/// Tests class validation rules.
///
/// Expected: BadRequest for zero capacity and negative price
#[tokio::test]
async fn validates_capacity_and_price() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ClassService::new(db);

    assert!(matches!(
        service.create(param(0, 100)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.create(param(5, -1)).await,
        Err(AppError::BadRequest(_))
    ));

    let class = service.create(param(5, 0)).await?;
    assert_eq!(class.available_seats, 5);

    Ok(())
}

/// Tests deleting an unknown class.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn delete_rejects_unknown_class() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ClassService::new(db).delete(3).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
