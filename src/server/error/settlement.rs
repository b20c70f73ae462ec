use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business-rule rejections of a settlement attempt.
///
/// Whenever one of these is returned the settlement transaction has been rolled back:
/// no payment is recorded, no reservation removed and no seat consumed.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SettlementError {
    /// One or more reservations do not exist, were never created or were already settled.
    #[error("Reservations not found: {0:?}")]
    NotFound(Vec<i32>),

    /// A reservation belongs to a different student than the payer.
    #[error("Reservation {reservation_id} is not owned by the payer")]
    OwnershipMismatch {
        /// The first reservation found with a different owner
        reservation_id: i32,
    },

    /// The paid amount differs from the sum of the reservation price snapshots.
    #[error("Amount {actual} does not match reserved total {expected}")]
    AmountMismatch {
        /// Sum of the reservation price snapshots
        expected: i64,
        /// Amount reported by the payer
        actual: i64,
    },

    /// The class has no seats left.
    #[error("Class {0} is sold out")]
    SoldOut(i32),

    /// The reserved class was deleted after the reservation was made.
    #[error("Class {0} no longer exists")]
    ClassNotFound(i32),
}

impl SettlementError {
    /// Stable machine-readable identifier of the rejection.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::OwnershipMismatch { .. } => "ownership_mismatch",
            Self::AmountMismatch { .. } => "amount_mismatch",
            Self::SoldOut(_) => "sold_out",
            Self::ClassNotFound(_) => "class_not_found",
        }
    }
}

/// Converts settlement rejections into HTTP responses.
///
/// # Returns
/// - 404 Not Found - For `NotFound` and `ClassNotFound`
/// - 403 Forbidden - For `OwnershipMismatch`
/// - 409 Conflict - For `SoldOut`
/// - 422 Unprocessable Entity - For `AmountMismatch`
impl IntoResponse for SettlementError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotFound(_) | Self::ClassNotFound(_) => StatusCode::NOT_FOUND,
            Self::OwnershipMismatch { .. } => StatusCode::FORBIDDEN,
            Self::AmountMismatch { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::SoldOut(_) => StatusCode::CONFLICT,
        };

        (status, Json(ErrorDto::new(self.kind(), self.to_string()))).into_response()
    }
}
