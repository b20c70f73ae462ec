use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Extracts the bearer token from the `Authorization` header.
///
/// # Arguments
/// - `headers` - Request headers
///
/// # Returns
/// - `Some(&str)` - Non-empty token following the `Bearer ` scheme
/// - `None` - Header absent, not valid UTF-8, another scheme, or an empty token
pub fn parse_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}
