use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const PAYMENT_API_URL: &str = "https://api.stripe.com/";
const PAYMENT_CURRENCY: &str = "inr";
const TOKEN_TTL_SECONDS: i64 = 60 * 60;
const PORT: u16 = 5000;

pub struct Config {
    pub database_url: String,

    /// Secret used to sign and verify identity tokens.
    pub access_token_secret: String,
    pub token_ttl: Duration,

    pub payment_secret_key: String,
    pub payment_api_url: String,
    pub payment_currency: String,

    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            access_token_secret: required("ACCESS_TOKEN_SECRET")?,
            token_ttl: Duration::seconds(parsed_or("TOKEN_TTL_SECONDS", TOKEN_TTL_SECONDS)?),
            payment_secret_key: required("PAYMENT_SECRET_KEY")?,
            payment_api_url: std::env::var("PAYMENT_API_URL")
                .unwrap_or_else(|_| PAYMENT_API_URL.to_string()),
            payment_currency: std::env::var("PAYMENT_CURRENCY")
                .unwrap_or_else(|_| PAYMENT_CURRENCY.to_string()),
            port: parsed_or("PORT", PORT)?,
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn parsed_or<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value,
        }),
        Err(_) => Ok(default),
    }
}
