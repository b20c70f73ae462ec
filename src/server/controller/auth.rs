use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::api::{ErrorDto, TokenDto, TokenRequestDto},
    server::{error::AppError, model::user::Identity, state::AppState},
};

pub static AUTH_TAG: &str = "auth";

/// GET / - Liveness check
pub async fn liveness() -> &'static str {
    "Enrollment server is running"
}

/// POST /api/jwt - Issue an identity token
///
/// The email is expected to be proven by the client's identity provider before it asks
/// for a token.
#[utoipa::path(
    post,
    path = "/api/jwt",
    tag = AUTH_TAG,
    request_body = TokenRequestDto,
    responses(
        (status = 200, description = "Signed identity token", body = TokenDto),
        (status = 400, description = "Empty email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(payload): Json<TokenRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let email = payload.email.trim();
    if email.is_empty() {
        return Err(AppError::BadRequest("email must not be empty".to_string()));
    }

    let token = state.tokens.issue(&Identity::new(email))?;

    Ok((StatusCode::OK, Json(TokenDto { token })))
}
