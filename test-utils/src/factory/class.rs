//! Class factory for creating test class entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test classes with customizable capacity and price.
///
/// `available_seats` defaults to the capacity unless set explicitly.
pub struct ClassFactory<'a> {
    db: &'a DatabaseConnection,
    instructor_email: String,
    title: String,
    capacity: i32,
    available_seats: Option<i32>,
    price: i64,
}

impl<'a> ClassFactory<'a> {
    /// Creates a new ClassFactory with default values.
    ///
    /// Defaults:
    /// - instructor_email: `"instructor{id}@example.com"`
    /// - title: `"Class {id}"`
    /// - capacity: `10`, available_seats: capacity
    /// - price: `500`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            instructor_email: format!("instructor{}@example.com", id),
            title: format!("Class {}", id),
            capacity: 10,
            available_seats: None,
            price: 500,
        }
    }

    /// Sets the owning instructor's email.
    pub fn instructor_email(mut self, email: impl Into<String>) -> Self {
        self.instructor_email = email.into();
        self
    }

    /// Sets the class title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the total seat capacity.
    pub fn capacity(mut self, capacity: i32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Sets the available seat counter independently of capacity.
    pub fn available_seats(mut self, available_seats: i32) -> Self {
        self.available_seats = Some(available_seats);
        self
    }

    /// Sets the price in minor currency units.
    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    /// Builds and inserts the class entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::class::Model)` - Created class entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            instructor_email: ActiveValue::Set(self.instructor_email),
            instructor_name: ActiveValue::Set(None),
            title: ActiveValue::Set(self.title),
            capacity: ActiveValue::Set(self.capacity),
            available_seats: ActiveValue::Set(self.available_seats.unwrap_or(self.capacity)),
            price: ActiveValue::Set(self.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a class with default values.
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::class::Model, DbErr> {
    ClassFactory::new(db).build().await
}
