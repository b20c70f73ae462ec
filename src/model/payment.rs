use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct PaymentDto {
    pub id: i32,
    pub student_email: String,
    /// Amount in minor currency units.
    pub amount: i64,
    pub currency: String,
    pub transaction_id: Option<String>,
    pub reservation_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SettlePaymentDto {
    pub reservation_ids: Vec<i32>,
    /// Amount in minor currency units; must equal the sum of the reservation prices.
    pub amount: i64,
    pub currency: String,
    /// Processor reference of the completed payment.
    pub transaction_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePaymentIntentDto {
    pub reservation_ids: Vec<i32>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaymentIntentDto {
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}
