//! Payment service: payment intents and payment history.
//!
//! The intent amount is always computed from the caller's own reservations, never taken
//! from the request.

use sea_orm::DatabaseConnection;
use std::collections::HashSet;

use crate::server::{
    data::{payment::PaymentRepository, reservation::ReservationRepository},
    error::{settlement::SettlementError, AppError},
    model::{
        payment::{Payment, PaymentIntent},
        user::Identity,
    },
    service::payment_intent::PaymentIntentGateway,
};

pub struct PaymentService<'a> {
    db: &'a DatabaseConnection,
    gateway: &'a dyn PaymentIntentGateway,
}

impl<'a> PaymentService<'a> {
    pub fn new(db: &'a DatabaseConnection, gateway: &'a dyn PaymentIntentGateway) -> Self {
        Self { db, gateway }
    }

    /// Creates a payment intent for the total of the caller's reservations.
    ///
    /// # Arguments
    /// - `identity` - Verified payer
    /// - `reservation_ids` - Reservations the payer intends to settle
    /// - `currency` - Currency of the intent
    ///
    /// # Returns
    /// - `Ok(PaymentIntent)` - Intent created at the processor
    /// - `Err(AppError::BadRequest)` - No ids, duplicated ids or a zero total
    /// - `Err(AppError::SettlementErr(NotFound | OwnershipMismatch))` - Unknown or foreign reservations
    /// - `Err(AppError::GatewayErr)` - The processor failed
    pub async fn create_intent(
        &self,
        identity: &Identity,
        reservation_ids: &[i32],
        currency: &str,
    ) -> Result<PaymentIntent, AppError> {
        if reservation_ids.is_empty() {
            return Err(AppError::BadRequest(
                "At least one reservation is required".to_string(),
            ));
        }
        let unique: HashSet<i32> = reservation_ids.iter().copied().collect();
        if unique.len() != reservation_ids.len() {
            return Err(AppError::BadRequest(
                "Reservations must not be listed more than once".to_string(),
            ));
        }

        let reservations = ReservationRepository::new(self.db)
            .find_by_ids(reservation_ids)
            .await?;
        if reservations.len() != reservation_ids.len() {
            let found: HashSet<i32> = reservations.iter().map(|r| r.id).collect();
            let missing = reservation_ids
                .iter()
                .copied()
                .filter(|id| !found.contains(id))
                .collect();
            return Err(SettlementError::NotFound(missing).into());
        }
        if let Some(foreign) = reservations
            .iter()
            .find(|r| r.student_email != identity.email)
        {
            return Err(SettlementError::OwnershipMismatch {
                reservation_id: foreign.id,
            }
            .into());
        }

        let amount: i64 = reservations.iter().map(|r| r.price).sum();
        if amount <= 0 {
            return Err(AppError::BadRequest(
                "Nothing to pay for the selected reservations".to_string(),
            ));
        }

        let intent = self.gateway.create_intent(amount, currency).await?;

        tracing::info!(
            "Created payment intent {} of {} {} for {}",
            intent.id,
            intent.amount,
            intent.currency,
            identity.email
        );

        Ok(intent)
    }

    /// Gets the payments of a student, newest first.
    pub async fn history(&self, email: &str) -> Result<Vec<Payment>, AppError> {
        Ok(PaymentRepository::new(self.db).get_by_student(email).await?)
    }
}
