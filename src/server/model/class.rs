//! Class domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::class::{ClassDto, CreateClassDto},
    server::model::user::Identity,
};

/// A class offered by an instructor with its seat ledger counter.
///
/// `available_seats` stays within `0..=capacity`; only settlement decrements it.
#[derive(Debug, Clone, PartialEq)]
pub struct Class {
    pub id: i32,
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub title: String,
    pub capacity: i32,
    pub available_seats: i32,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl Class {
    pub fn into_dto(self) -> ClassDto {
        ClassDto {
            id: self.id,
            instructor_email: self.instructor_email,
            instructor_name: self.instructor_name,
            title: self.title,
            capacity: self.capacity,
            available_seats: self.available_seats,
            price: self.price,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::class::Model) -> Self {
        Self {
            id: entity.id,
            instructor_email: entity.instructor_email,
            instructor_name: entity.instructor_name,
            title: entity.title,
            capacity: entity.capacity,
            available_seats: entity.available_seats,
            price: entity.price,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for publishing a new class.
#[derive(Debug, Clone)]
pub struct CreateClassParam {
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub title: String,
    pub capacity: i32,
    pub price: i64,
}

impl CreateClassParam {
    /// Builds creation parameters owned by the verified instructor identity.
    pub fn from_dto(instructor: &Identity, dto: CreateClassDto) -> Self {
        Self {
            instructor_email: instructor.email.clone(),
            instructor_name: dto.instructor_name,
            title: dto.title,
            capacity: dto.capacity,
            price: dto.price,
        }
    }
}

/// Result of a conditional seat decrement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatDecrement {
    /// One seat was consumed.
    Taken,
    /// The class exists but has no seats left.
    SoldOut,
    /// The class does not exist.
    Missing,
}
