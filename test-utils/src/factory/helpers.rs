//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::{class::ClassFactory, user::UserFactory};

/// Counter for generating unique IDs in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an instructor user and a class owned by them.
///
/// The class uses the `ClassFactory` defaults (capacity 10, price 500).
///
/// # Returns
/// - `Ok((instructor, class))` - Created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_class_with_instructor(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::class::Model), DbErr> {
    let instructor = UserFactory::new(db).role("instructor").build().await?;
    let class = ClassFactory::new(db)
        .instructor_email(instructor.email.clone())
        .build()
        .await?;

    Ok((instructor, class))
}
