//! Reservation domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::reservation::ReservationDto;

/// An unpaid hold by a student on one class, with the price at selection time.
#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub class_title: String,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn into_dto(self) -> ReservationDto {
        ReservationDto {
            id: self.id,
            student_email: self.student_email,
            class_id: self.class_id,
            class_title: self.class_title,
            price: self.price,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::reservation::Model) -> Self {
        Self {
            id: entity.id,
            student_email: entity.student_email,
            class_id: entity.class_id,
            class_title: entity.class_title,
            price: entity.price,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for selecting a class.
#[derive(Debug, Clone)]
pub struct SelectClassParam {
    pub student_email: String,
    pub class_id: i32,
}

/// Row data for a new reservation, including the snapshot taken from the class.
#[derive(Debug, Clone)]
pub struct CreateReservationParam {
    pub student_email: String,
    pub class_id: i32,
    pub class_title: String,
    pub price: i64,
}
