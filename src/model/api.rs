use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of every rejected request.
///
/// `kind` is a stable machine-readable identifier, `error` a human readable message.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub kind: String,
    pub error: String,
}

impl ErrorDto {
    pub fn new(kind: &str, error: impl Into<String>) -> Self {
        Self {
            kind: kind.to_string(),
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenRequestDto {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
}
