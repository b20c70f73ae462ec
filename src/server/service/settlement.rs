//! Settlement engine.
//!
//! Converts a payer's reservations into a recorded payment in one database transaction:
//! every reservation is checked, one seat per reservation is consumed from the class ledger,
//! the payment with its items is inserted and the reservations are deleted. Any failure
//! rolls the whole transaction back, so a rejected settlement leaves no trace.
//!
//! The transaction takes the write lock at `BEGIN`. Concurrent settlements queue on that
//! lock instead of failing to upgrade a read lock, so the later one reads the counter the
//! earlier one committed and is rejected as sold out.

use std::collections::HashSet;

use sea_orm::{
    DatabaseConnection, DatabaseTransaction, DbErr, SqlErr, SqliteTransactionMode,
    TransactionOptions, TransactionTrait,
};

use crate::server::{
    data::{
        class::ClassRepository, payment::PaymentRepository, reservation::ReservationRepository,
    },
    error::{settlement::SettlementError, AppError},
    model::{
        class::SeatDecrement,
        payment::{CreatePaymentParam, Payment, SettleParam},
    },
};

pub struct SettlementService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettlementService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Settles reservations into a payment.
    ///
    /// # Returns
    /// - `Ok(Payment)` - Committed payment with its consumed reservation ids
    /// - `Err(AppError::BadRequest)` - Empty or duplicated reservation ids
    /// - `Err(AppError::SettlementErr)` - Business rejection, nothing was changed
    /// - `Err(AppError::DbErr)` - Store fault, nothing was changed
    pub async fn settle(&self, param: SettleParam) -> Result<Payment, AppError> {
        validate_ids(&param.reservation_ids)?;

        let txn = self
            .db
            .begin_with_options(TransactionOptions {
                sqlite_transaction_mode: Some(SqliteTransactionMode::Immediate),
                ..Default::default()
            })
            .await?;

        match settle_in(&txn, &param).await {
            Ok(payment) => {
                txn.commit().await?;

                tracing::info!(
                    "Settled payment {} of {} {} for {} covering reservations {:?}",
                    payment.id,
                    payment.amount,
                    payment.currency,
                    payment.student_email,
                    payment.reservation_ids
                );

                Ok(payment)
            }
            Err(err) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Failed to roll back settlement: {}", rollback_err);
                }

                if let AppError::SettlementErr(reason) = &err {
                    tracing::warn!(
                        "Rejected settlement for {} of {:?}: {}",
                        param.payer_email,
                        param.reservation_ids,
                        reason
                    );
                }

                Err(err)
            }
        }
    }
}

fn validate_ids(ids: &[i32]) -> Result<(), AppError> {
    if ids.is_empty() {
        return Err(AppError::BadRequest(
            "At least one reservation is required".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(ids.len());
    if let Some(duplicate) = ids.iter().find(|id| !seen.insert(**id)) {
        return Err(AppError::BadRequest(format!(
            "Reservation {} is listed more than once",
            duplicate
        )));
    }

    Ok(())
}

async fn settle_in(txn: &DatabaseTransaction, param: &SettleParam) -> Result<Payment, AppError> {
    let reservation_repo = ReservationRepository::new(txn);
    let class_repo = ClassRepository::new(txn);
    let payment_repo = PaymentRepository::new(txn);

    let reservations = reservation_repo.find_by_ids(&param.reservation_ids).await?;
    if reservations.len() != param.reservation_ids.len() {
        let found: HashSet<i32> = reservations.iter().map(|r| r.id).collect();
        let missing = param
            .reservation_ids
            .iter()
            .copied()
            .filter(|id| !found.contains(id))
            .collect();

        return Err(SettlementError::NotFound(missing).into());
    }

    if let Some(foreign) = reservations
        .iter()
        .find(|r| r.student_email != param.payer_email)
    {
        return Err(SettlementError::OwnershipMismatch {
            reservation_id: foreign.id,
        }
        .into());
    }

    let expected: i64 = reservations.iter().map(|r| r.price).sum();
    if expected != param.amount {
        return Err(SettlementError::AmountMismatch {
            expected,
            actual: param.amount,
        }
        .into());
    }

    for reservation in &reservations {
        match class_repo.take_seat(reservation.class_id).await? {
            SeatDecrement::Taken => {}
            SeatDecrement::SoldOut => {
                return Err(SettlementError::SoldOut(reservation.class_id).into())
            }
            SeatDecrement::Missing => {
                return Err(SettlementError::ClassNotFound(reservation.class_id).into())
            }
        }
    }

    let payment = payment_repo
        .create(
            CreatePaymentParam {
                student_email: param.payer_email.clone(),
                amount: param.amount,
                currency: param.currency.clone(),
                transaction_id: param.transaction_id.clone(),
            },
            &reservations,
        )
        .await
        .map_err(|err| already_settled(err, &param.reservation_ids))?;

    let removed = reservation_repo.delete_many(&param.reservation_ids).await?;
    if removed != param.reservation_ids.len() as u64 {
        return Err(SettlementError::NotFound(param.reservation_ids.clone()).into());
    }

    Ok(payment)
}

/// Maps a unique violation on `payment_item.reservation_id` to a replayed settlement.
fn already_settled(err: DbErr, ids: &[i32]) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            SettlementError::NotFound(ids.to_vec()).into()
        }
        _ => err.into(),
    }
}
