use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ClassDto {
    pub id: i32,
    pub instructor_email: String,
    pub instructor_name: Option<String>,
    pub title: String,
    pub capacity: i32,
    pub available_seats: i32,
    /// Price in minor currency units.
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateClassDto {
    pub title: String,
    pub instructor_name: Option<String>,
    pub capacity: i32,
    /// Price in minor currency units.
    pub price: i64,
}
