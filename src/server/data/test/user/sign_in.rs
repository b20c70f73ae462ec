use super::*;

/// Tests the first sign-in of a new email.
///
/// Expected: Ok with a created user holding no role
#[tokio::test]
async fn creates_user_without_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let (user, created) = repo
        .sign_in(SignInParam {
            email: "new@example.com".to_string(),
            name: Some("New".to_string()),
        })
        .await?;

    assert!(created);
    assert_eq!(user.email, "new@example.com");
    assert_eq!(user.name.as_deref(), Some("New"));
    assert_eq!(user.role, Role::None);

    Ok(())
}

/// Tests that signing in again returns the stored record unchanged.
///
/// A granted role must survive later sign-ins.
///
/// Expected: Ok with created false and the original role
#[tokio::test]
async fn keeps_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("instructor@example.com")
        .role("instructor")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let (user, created) = repo
        .sign_in(SignInParam {
            email: "instructor@example.com".to_string(),
            name: Some("Other Name".to_string()),
        })
        .await?;

    assert!(!created);
    assert_eq!(user.role, Role::Instructor);

    Ok(())
}

/// Tests that a stored role outside the known set surfaces as an internal error.
///
/// Expected: Err(AppError::InternalErr)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("odd@example.com")
        .role("superuser")
        .build()
        .await?;

    let result = UserRepository::new(db).find_by_email("odd@example.com").await;

    assert!(matches!(result, Err(AppError::InternalErr(_))));

    Ok(())
}
