//! Payment domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::payment::PaymentDto;

/// An immutable settled payment with the reservations it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub student_email: String,
    pub amount: i64,
    pub currency: String,
    pub transaction_id: Option<String>,
    pub reservation_ids: Vec<i32>,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn into_dto(self) -> PaymentDto {
        PaymentDto {
            id: self.id,
            student_email: self.student_email,
            amount: self.amount,
            currency: self.currency,
            transaction_id: self.transaction_id,
            reservation_ids: self.reservation_ids,
            created_at: self.created_at,
        }
    }

    /// Converts a payment row and its item rows into the domain model.
    pub fn from_entity(
        entity: entity::payment::Model,
        items: Vec<entity::payment_item::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            student_email: entity.student_email,
            amount: entity.amount,
            currency: entity.currency,
            transaction_id: entity.transaction_id,
            reservation_ids: items.into_iter().map(|i| i.reservation_id).collect(),
            created_at: entity.created_at,
        }
    }
}

/// Parameters for settling reservations into a payment.
#[derive(Debug, Clone)]
pub struct SettleParam {
    /// Email of the verified payer identity.
    pub payer_email: String,
    pub reservation_ids: Vec<i32>,
    pub amount: i64,
    pub currency: String,
    pub transaction_id: Option<String>,
}

/// Row data for a new payment.
#[derive(Debug, Clone)]
pub struct CreatePaymentParam {
    pub student_email: String,
    pub amount: i64,
    pub currency: String,
    pub transaction_id: Option<String>,
}

/// Charge intent created by the payment processor.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentIntent {
    /// Processor identifier of the intent.
    pub id: String,
    /// Secret the client uses to complete the payment.
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}
