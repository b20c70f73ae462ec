use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Duration;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Authorization, Capability, DenyReason},
    model::user::Identity,
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod evaluate;
mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-secret", Duration::hours(1))
}

/// Builds request headers carrying a valid token for `email`.
fn bearer_for(tokens: &TokenService, email: &str) -> HeaderMap {
    let token = tokens.issue(&Identity::new(email)).unwrap();
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
