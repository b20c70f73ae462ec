//! Class service for publishing and removing classes.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::class::ClassRepository,
    error::AppError,
    model::class::{Class, CreateClassParam},
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Publishes a class with every seat available.
    ///
    /// # Returns
    /// - `Ok(Class)` - The created class
    /// - `Err(AppError::BadRequest)` - Empty title, capacity below 1 or negative price
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, param: CreateClassParam) -> Result<Class, AppError> {
        if param.title.trim().is_empty() {
            return Err(AppError::BadRequest("title must not be empty".to_string()));
        }
        if param.capacity <= 0 {
            return Err(AppError::BadRequest(
                "capacity must be greater than zero".to_string(),
            ));
        }
        if param.price < 0 {
            return Err(AppError::BadRequest("price must not be negative".to_string()));
        }

        let class = ClassRepository::new(self.db).create(param).await?;

        tracing::info!(
            "Instructor {} published class {} with {} seats",
            class.instructor_email,
            class.id,
            class.capacity
        );

        Ok(class)
    }

    /// Deletes a class together with its open reservations.
    ///
    /// # Returns
    /// - `Ok(())` - Class deleted
    /// - `Err(AppError::NotFound)` - No class with that id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ClassRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound(format!("Class {} not found", id)));
        }

        Ok(())
    }

    pub async fn get_by_instructor(&self, email: &str) -> Result<Vec<Class>, AppError> {
        Ok(ClassRepository::new(self.db).get_by_instructor(email).await?)
    }
}
