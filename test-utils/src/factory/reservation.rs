//! Reservation factory for creating selected-class entries.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating reservations against an existing class.
///
/// The price snapshot defaults to the class's current price.
pub struct ReservationFactory<'a> {
    db: &'a DatabaseConnection,
    student_email: String,
    class_id: i32,
    class_title: String,
    price: i64,
}

impl<'a> ReservationFactory<'a> {
    /// Creates a new ReservationFactory for the given student and class.
    pub fn new(
        db: &'a DatabaseConnection,
        student_email: impl Into<String>,
        class: &entity::class::Model,
    ) -> Self {
        Self {
            db,
            student_email: student_email.into(),
            class_id: class.id,
            class_title: class.title.clone(),
            price: class.price,
        }
    }

    /// Overrides the price snapshot.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the reservation entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::reservation::Model)` - Created reservation entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::reservation::Model, DbErr> {
        entity::reservation::ActiveModel {
            student_email: ActiveValue::Set(self.student_email),
            class_id: ActiveValue::Set(self.class_id),
            class_title: ActiveValue::Set(self.class_title),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a reservation for the student on the class with the class's current price.
pub async fn create_reservation(
    db: &DatabaseConnection,
    student_email: impl Into<String>,
    class: &entity::class::Model,
) -> Result<entity::reservation::Model, DbErr> {
    ReservationFactory::new(db, student_email, class).build().await
}
