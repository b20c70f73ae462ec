//! Reservation service: selecting, listing and withdrawing classes.
//!
//! A reservation never consumes a seat; capacity is only checked at settlement.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{class::ClassRepository, reservation::ReservationRepository},
    error::AppError,
    model::{
        reservation::{CreateReservationParam, Reservation, SelectClassParam},
        user::Identity,
    },
};

pub struct ReservationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Selects a class for a student, snapshotting its title and current price.
    ///
    /// # Returns
    /// - `Ok(Reservation)` - The new reservation
    /// - `Err(AppError::NotFound)` - The class does not exist
    /// - `Err(AppError::Conflict)` - The student already selected this class
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn select(&self, param: SelectClassParam) -> Result<Reservation, AppError> {
        let Some(class) = ClassRepository::new(self.db)
            .find_by_id(param.class_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Class {} not found",
                param.class_id
            )));
        };

        let repo = ReservationRepository::new(self.db);
        if repo
            .find_by_student_and_class(&param.student_email, class.id)
            .await?
            .is_some()
        {
            return Err(already_selected(class.id));
        }

        let result = repo
            .create(CreateReservationParam {
                student_email: param.student_email,
                class_id: class.id,
                class_title: class.title,
                price: class.price,
            })
            .await;

        match result {
            Ok(reservation) => Ok(reservation),
            // A concurrent selection of the same class passed the check above.
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(already_selected(class.id))
            }
            Err(err) => Err(err.into()),
        }
    }

    pub async fn list_for(&self, email: &str) -> Result<Vec<Reservation>, AppError> {
        Ok(ReservationRepository::new(self.db)
            .find_by_student(email)
            .await?)
    }

    /// Withdraws one of the caller's own reservations.
    ///
    /// A reservation owned by another student is reported as not found.
    ///
    /// # Returns
    /// - `Ok(())` - Reservation deleted
    /// - `Err(AppError::NotFound)` - No such reservation owned by the caller
    pub async fn withdraw(&self, identity: &Identity, id: i32) -> Result<(), AppError> {
        if !ReservationRepository::new(self.db)
            .delete_owned(id, &identity.email)
            .await?
        {
            return Err(AppError::NotFound(format!("Reservation {} not found", id)));
        }

        Ok(())
    }
}

fn already_selected(class_id: i32) -> AppError {
    AppError::Conflict(format!("Class {} is already selected", class_id))
}
