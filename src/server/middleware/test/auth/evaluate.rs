use super::*;

/// Tests that a mismatched self-only capability is denied without a user record.
///
/// Expected: Denied with IdentityMismatch
#[tokio::test]
async fn denies_other_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer_for(&tokens, "a@example.com");

    let outcome = AuthGuard::new(db, &tokens, &headers)
        .evaluate(&[Capability::SelfOnly("b@example.com".to_string())])
        .await?;

    assert_eq!(
        outcome,
        Authorization::Denied {
            identity: Identity::new("a@example.com"),
            reason: DenyReason::IdentityMismatch {
                requested: "b@example.com".to_string()
            },
        }
    );

    Ok(())
}

/// Tests that an empty capability list accepts any verified identity.
///
/// Expected: Authorized even without a user record
#[tokio::test]
async fn authorizes_any_verified_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer_for(&tokens, "new@example.com");

    let outcome = AuthGuard::new(db, &tokens, &headers).evaluate(&[]).await?;

    assert_eq!(
        outcome,
        Authorization::Authorized(Identity::new("new@example.com"))
    );

    Ok(())
}

/// Tests that a role capability is denied when no user record exists.
///
/// Expected: Denied with NotRegistered
#[tokio::test]
async fn denies_unregistered_identity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = tokens();
    let headers = bearer_for(&tokens, "ghost@example.com");

    let outcome = AuthGuard::new(db, &tokens, &headers)
        .evaluate(&[Capability::Admin])
        .await?;

    assert!(matches!(
        outcome,
        Authorization::Denied {
            reason: DenyReason::NotRegistered,
            ..
        }
    ));

    Ok(())
}

/// Tests combining instructor and self-only capabilities.
///
/// Expected: Authorized for the instructor requesting their own data
#[tokio::test]
async fn authorizes_instructor_self() -> Result<(), AppError> {
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

    let outcome = AuthGuard::new(db, &tokens, &headers)
        .evaluate(&[
            Capability::Instructor,
            Capability::SelfOnly("instructor@example.com".to_string()),
        ])
        .await?;

    assert!(matches!(outcome, Authorization::Authorized(_)));

    Ok(())
}
