//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every response body is an `ErrorDto` carrying a stable `kind` next to the message.

pub mod auth;
pub mod config;
pub mod gateway;
pub mod internal;
pub mod settlement;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, gateway::GatewayError, internal::InternalError,
        settlement::SettlementError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors (`AuthError`,
/// `SettlementError`, `GatewayError`) handle their own response mapping, while generic
/// variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` (401 Unauthorized, 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Business-rule rejection from the settlement engine.
    ///
    /// No mutation happened; the caller may retry with corrected input.
    #[error(transparent)]
    SettlementErr(#[from] SettlementError),

    /// Payment processor failure while creating a payment intent.
    #[error(transparent)]
    GatewayErr(#[from] GatewayError),

    /// Database operation error from SeaORM.
    ///
    /// Treated as a transient infrastructure fault: 503 Service Unavailable, safe to
    /// retry unchanged. Never reported as a business failure.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Unexpected inconsistency in stored data or the codebase.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing state.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 409 Conflict - For `Conflict` variant
/// - 503 Service Unavailable - For `DbErr`, the request may be retried unchanged
/// - 500 Internal Server Error - For configuration and internal errors
/// - Variable - For `AuthErr`, `SettlementErr` and `GatewayErr`, delegated to their own impls
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::SettlementErr(err) => err.into_response(),
            Self::GatewayErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new("not_found", msg))).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto::new("bad_request", msg))).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto::new("conflict", msg))).into_response()
            }
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ErrorDto::new(
                        "transient_store_error",
                        "Storage is temporarily unavailable, please retry",
                    )),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic message to the client to avoid leaking
/// implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto::new("internal_error", "Internal server error")),
        )
            .into_response()
    }
}
