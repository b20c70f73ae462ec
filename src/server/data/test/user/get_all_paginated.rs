use super::*;

/// Tests paging through users ordered by email.
///
/// Expected: Ok with two users on the first page, one on the second and a total of 3
#[tokio::test]
async fn pages_users_by_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for email in ["c@example.com", "a@example.com", "b@example.com"] {
        factory::user::create_user_with_email(db, email).await?;
    }

    let repo = UserRepository::new(db);
    let (first, total) = repo.get_all_paginated(0, 2).await?;
    let (second, _) = repo.get_all_paginated(1, 2).await?;

    assert_eq!(total, 3);
    assert_eq!(
        first.iter().map(|u| u.email.as_str()).collect::<Vec<_>>(),
        vec!["a@example.com", "b@example.com"]
    );
    assert_eq!(second.len(), 1);
    assert_eq!(second[0].email, "c@example.com");

    Ok(())
}

/// Tests paging an empty user table.
///
/// Expected: Ok with no users and a total of 0
#[tokio::test]
async fn returns_empty_page() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (users, total) = UserRepository::new(db).get_all_paginated(0, 10).await?;

    assert!(users.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
