//! Identity token service.
//!
//! Issues and verifies HS256 signed tokens proving control of an email identity. The
//! service is a pure function of the signing secret and holds no other state.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    error::{auth::AuthError, internal::InternalError, AppError},
    model::user::Identity,
};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    email: String,
    iat: i64,
    exp: i64,
}

/// Signs and verifies identity tokens with the server-held secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// Creates a token service.
    ///
    /// # Arguments
    /// - `secret` - Shared HMAC secret
    /// - `ttl` - Lifetime of issued tokens
    pub fn new(secret: &str, ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            ttl,
        }
    }

    /// Issues a token for the identity, expiring after the configured TTL.
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded token
    /// - `Err(AppError::InternalErr(TokenSigning))` - Signing failed
    pub fn issue(&self, identity: &Identity) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            email: identity.email.clone(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(InternalError::TokenSigning)?;

        Ok(token)
    }

    /// Verifies a presented token and returns the identity it proves.
    ///
    /// # Arguments
    /// - `token` - Bearer token from the request, `None` if none was presented
    ///
    /// # Returns
    /// - `Ok(Identity)` - Signature and expiry are valid
    /// - `Err(AuthError::MissingToken)` - No token was presented
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn verify(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        let Some(token) = token else {
            return Err(AuthError::MissingToken);
        };

        let data = decode::<Claims>(token, &self.decoding, &self.validation)
            .map_err(AuthError::InvalidToken)?;

        Ok(Identity::new(data.claims.email))
    }
}
