use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct ReservationDto {
    pub id: i32,
    pub student_email: String,
    pub class_id: i32,
    pub class_title: String,
    /// Price snapshot taken when the class was selected.
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SelectClassDto {
    pub class_id: i32,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ReservationQuery {
    /// Email whose reservations are listed; must match the token identity.
    pub email: Option<String>,
}
