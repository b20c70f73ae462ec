use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Failures talking to the payment processor.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The HTTP request to the processor failed or its body could not be decoded.
    #[error(transparent)]
    Request(#[from] reqwest::Error),

    /// The processor answered with a non-success status.
    #[error("Payment processor rejected intent with status {status}: {message}")]
    Rejected {
        /// HTTP status returned by the processor
        status: u16,
        /// Raw body returned by the processor
        message: String,
    },

    /// The configured processor URL cannot be joined with the intent endpoint.
    #[error(transparent)]
    InvalidUrl(#[from] url::ParseError),
}

/// Converts gateway errors into a 502 Bad Gateway response.
///
/// Processor details are logged but not returned to the client.
impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        tracing::error!("Payment gateway error: {}", self);

        (
            StatusCode::BAD_GATEWAY,
            Json(ErrorDto::new(
                "payment_gateway_error",
                "Payment processor is unavailable, please retry",
            )),
        )
            .into_response()
    }
}
