//! Payment processor client.
//!
//! The processor is an external collaborator reached through `PaymentIntentGateway`, so
//! services and tests never depend on the HTTP implementation directly.

use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use crate::server::{error::gateway::GatewayError, model::payment::PaymentIntent};

/// Creates charge intents at the payment processor.
#[async_trait]
pub trait PaymentIntentGateway: Send + Sync {
    /// Creates an intent to charge `amount` minor units of `currency`.
    async fn create_intent(&self, amount: i64, currency: &str)
        -> Result<PaymentIntent, GatewayError>;
}

#[derive(Deserialize)]
struct IntentResponse {
    id: String,
    client_secret: String,
    amount: i64,
    currency: String,
}

/// Gateway posting form-encoded intents to the processor's REST API.
pub struct HttpPaymentIntentGateway {
    http_client: reqwest::Client,
    endpoint: Url,
    secret_key: String,
}

impl HttpPaymentIntentGateway {
    /// Creates the gateway for the processor at `base_url`.
    ///
    /// # Returns
    /// - `Ok(HttpPaymentIntentGateway)` - Gateway targeting `{base_url}v1/payment_intents`
    /// - `Err(GatewayError::InvalidUrl)` - `base_url` is not a valid URL
    pub fn new(
        http_client: reqwest::Client,
        base_url: &str,
        secret_key: String,
    ) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(base_url)?.join("v1/payment_intents")?;

        Ok(Self {
            http_client,
            endpoint,
            secret_key,
        })
    }
}

#[async_trait]
impl PaymentIntentGateway for HttpPaymentIntentGateway {
    async fn create_intent(
        &self,
        amount: i64,
        currency: &str,
    ) -> Result<PaymentIntent, GatewayError> {
        let form = [
            ("amount", amount.to_string()),
            ("currency", currency.to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let intent: IntentResponse = response.json().await?;

        Ok(PaymentIntent {
            id: intent.id,
            client_secret: intent.client_secret,
            amount: intent.amount,
            currency: intent.currency,
        })
    }
}

/// In-memory gateway recording every requested intent.
#[cfg(test)]
pub mod fake {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    pub struct FakePaymentIntentGateway {
        pub requests: Mutex<Vec<(i64, String)>>,
        pub reject: bool,
    }

    impl FakePaymentIntentGateway {
        pub fn rejecting() -> Self {
            Self {
                reject: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl PaymentIntentGateway for FakePaymentIntentGateway {
        async fn create_intent(
            &self,
            amount: i64,
            currency: &str,
        ) -> Result<PaymentIntent, GatewayError> {
            if self.reject {
                return Err(GatewayError::Rejected {
                    status: 402,
                    message: "card_declined".to_string(),
                });
            }

            let mut requests = self.requests.lock().unwrap();
            requests.push((amount, currency.to_string()));

            Ok(PaymentIntent {
                id: format!("pi_{}", requests.len()),
                client_secret: format!("pi_{}_secret", requests.len()),
                amount,
                currency: currency.to_string(),
            })
        }
    }
}
