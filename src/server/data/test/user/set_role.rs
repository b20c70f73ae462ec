use super::*;

/// Tests elevating a user to admin.
///
/// Expected: Ok(true) and the stored role is admin
#[tokio::test]
async fn grants_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    let updated = repo.set_role(user.id, Role::Admin).await?;

    assert!(updated);
    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.role, Role::Admin);

    Ok(())
}

/// Tests changing the role of a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn reports_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let updated = UserRepository::new(db).set_role(999, Role::Instructor).await?;

    assert!(!updated);

    Ok(())
}
