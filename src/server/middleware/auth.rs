//! Request authorization guard.
//!
//! Every protected handler builds an `AuthGuard` from the request headers and calls
//! `require` with the capabilities it needs before doing anything else. The identity the
//! guard checks is always the one proven by the bearer token, never a request parameter.

use axum::http::HeaderMap;
use sea_orm::DatabaseConnection;
use std::fmt;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{Identity, Role},
    service::token::TokenService,
    util::parse::parse_bearer_token,
};

/// A condition the verified identity must satisfy.
#[derive(Debug, Clone)]
pub enum Capability {
    /// The identity's user record holds the admin role.
    Admin,
    /// The identity's user record holds the instructor role.
    Instructor,
    /// The identity is the given email.
    SelfOnly(String),
}

/// Why an authenticated identity was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    NotRegistered,
    MissingRole(Role),
    IdentityMismatch { requested: String },
}

impl fmt::Display for DenyReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRegistered => f.write_str("no user record"),
            Self::MissingRole(role) => write!(f, "missing role {}", role),
            Self::IdentityMismatch { requested } => {
                write!(f, "requested data of {}", requested)
            }
        }
    }
}

/// Outcome of evaluating capabilities for a verified identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Authorization {
    Authorized(Identity),
    Denied { identity: Identity, reason: DenyReason },
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            tokens,
            headers,
        }
    }

    /// Verifies the bearer token and checks every capability in order.
    ///
    /// Identity checks run before role lookups, so a mismatched `SelfOnly` never touches
    /// the store. An empty capability list accepts any verified identity.
    ///
    /// # Returns
    /// - `Ok(Authorization)` - The token was valid; the identity was authorized or denied
    /// - `Err(AppError::AuthErr)` - Token missing or invalid
    /// - `Err(AppError::DbErr)` - Database error during role lookup
    pub async fn evaluate(&self, capabilities: &[Capability]) -> Result<Authorization, AppError> {
        let identity = self.tokens.verify(parse_bearer_token(self.headers))?;

        for capability in capabilities {
            if let Capability::SelfOnly(email) = capability {
                if *email != identity.email {
                    return Ok(Authorization::Denied {
                        reason: DenyReason::IdentityMismatch {
                            requested: email.clone(),
                        },
                        identity,
                    });
                }
            }
        }

        for capability in capabilities {
            let role = match capability {
                Capability::Admin => Role::Admin,
                Capability::Instructor => Role::Instructor,
                Capability::SelfOnly(_) => continue,
            };

            if let Err(reason) = self.check_role(&identity, role).await? {
                return Ok(Authorization::Denied { identity, reason });
            }
        }

        Ok(Authorization::Authorized(identity))
    }

    /// Evaluates capabilities and turns a denial into an error.
    ///
    /// # Returns
    /// - `Ok(Identity)` - The verified identity holding every capability
    /// - `Err(AppError::AuthErr(MissingToken | InvalidToken))` - 401
    /// - `Err(AppError::AuthErr(AccessDenied))` - 403
    pub async fn require(&self, capabilities: &[Capability]) -> Result<Identity, AppError> {
        match self.evaluate(capabilities).await? {
            Authorization::Authorized(identity) => Ok(identity),
            Authorization::Denied { identity, reason } => {
                tracing::warn!("Denied access for {}: {}", identity.email, reason);
                Err(AuthError::AccessDenied(identity.email, reason.to_string()).into())
            }
        }
    }

    async fn check_role(
        &self,
        identity: &Identity,
        role: Role,
    ) -> Result<Result<(), DenyReason>, AppError> {
        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&identity.email)
            .await?
        else {
            return Ok(Err(DenyReason::NotRegistered));
        };

        if user.role != role {
            return Ok(Err(DenyReason::MissingRole(role)));
        }

        Ok(Ok(()))
    }
}
