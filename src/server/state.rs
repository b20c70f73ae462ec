//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request handler
//! through Axum's state extraction. It holds:
//! - Database connection pool for data persistence
//! - Identity token service for issuing and verifying bearer tokens
//! - Payment intent gateway for the external payment processor
//! - Currency used for payment intents

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::service::{payment_intent::PaymentIntentGateway, token::TokenService};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds the signing keys
/// - `Arc<dyn PaymentIntentGateway>` is a reference-counted pointer
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies identity tokens with the server-held secret.
    pub tokens: TokenService,

    /// Payment processor used to create payment intents.
    pub payment_gateway: Arc<dyn PaymentIntentGateway>,

    /// Currency code for payment intents, e.g. `inr`.
    pub currency: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Identity token service
    /// - `payment_gateway` - Payment processor client
    /// - `currency` - Currency code for payment intents
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        payment_gateway: Arc<dyn PaymentIntentGateway>,
        currency: String,
    ) -> Self {
        Self {
            db,
            tokens,
            payment_gateway,
            currency,
        }
    }
}
