use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No bearer token was presented with the request.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Request carries no bearer token")]
    MissingToken,

    /// The bearer token failed signature or expiry verification.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Bearer token rejected: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The verified identity lacks the capability required by the operation.
    ///
    /// Holds the identity's email and the reason for the denial. Results in a
    /// 403 Forbidden response.
    #[error("Access denied for {0}: {1}")]
    AccessDenied(String, String),
}

/// Converts authentication errors into HTTP responses.
///
/// Details are logged at debug level; client-facing messages stay generic.
///
/// # Returns
/// - 401 Unauthorized - For missing or invalid tokens
/// - 403 Forbidden - For denied capabilities
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("unauthorized", "Unauthorized access")),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("forbidden", "Forbidden access")),
            )
                .into_response(),
        }
    }
}
