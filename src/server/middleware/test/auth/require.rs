use super::*;

/// Tests that a request without a token is rejected before any role check.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Capability::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests that a token signed with another secret is rejected.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_forged_token() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let forger = TokenService::new("not-the-secret", Duration::hours(1));
    let headers = bearer_for(&forger, "admin@example.com");

    let result = AuthGuard::new(db, &tokens, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests admin user successfully passes the admin capability.
///
/// Expected: Ok(Identity) for the admin
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::user::UserFactory::new(db)
        .email("admin@example.com")
        .role("admin")
        .build()
        .await?;
    let tokens = tokens();
    let headers = bearer_for(&tokens, "admin@example.com");

    let identity = AuthGuard::new(db, &tokens, &headers)
        .require(&[Capability::Admin])
        .await?;

    assert_eq!(identity.email, "admin@example.com");

    Ok(())
}

/// Tests that an instructor does not pass the admin capability.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
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
    let tokens = tokens();
    let headers = bearer_for(&tokens, "instructor@example.com");

    let result = AuthGuard::new(db, &tokens, &headers)
        .require(&[Capability::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the instructor capability against stored roles.
///
/// Expected: Ok for an instructor, AccessDenied for a student and an admin
#[tokio::test]
async fn requires_instructor_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    for (email, role) in [
        ("instructor@example.com", "instructor"),
        ("student@example.com", "student"),
        ("admin@example.com", "admin"),
    ] {
        factory::user::UserFactory::new(db)
            .email(email)
            .role(role)
            .build()
            .await?;
    }
    let tokens = tokens();

    let headers = bearer_for(&tokens, "instructor@example.com");
    let identity = AuthGuard::new(db, &tokens, &headers)
        .require(&[Capability::Instructor])
        .await?;
    assert_eq!(identity.email, "instructor@example.com");

    for email in ["student@example.com", "admin@example.com"] {
        let headers = bearer_for(&tokens, email);
        let result = AuthGuard::new(db, &tokens, &headers)
            .require(&[Capability::Instructor])
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
        ));
    }

    Ok(())
}
