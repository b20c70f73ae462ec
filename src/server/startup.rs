use std::{sync::Arc, time::Duration};

use crate::server::{
    config::Config, error::AppError, service::payment_intent::HttpPaymentIntentGateway,
};

/// How long a connection waits for the SQLite write lock before failing with `SQLITE_BUSY`.
const DATABASE_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false)
        .map_sqlx_sqlite_opts(|opts| opts.busy_timeout(DATABASE_BUSY_TIMEOUT));

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for payment processor requests.
///
/// Redirects are disabled so a misconfigured processor URL cannot bounce the secret key
/// to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .map_err(crate::server::error::gateway::GatewayError::from)?;

    Ok(client)
}

/// Creates the payment intent gateway from configuration.
///
/// # Returns
/// - `Ok(Arc<HttpPaymentIntentGateway>)` - Gateway ready to create intents
/// - `Err(AppError::GatewayErr)` - The configured processor URL is invalid
pub fn setup_payment_gateway(
    config: &Config,
    http_client: reqwest::Client,
) -> Result<Arc<HttpPaymentIntentGateway>, AppError> {
    let gateway = HttpPaymentIntentGateway::new(
        http_client,
        &config.payment_api_url,
        config.payment_secret_key.clone(),
    )?;

    Ok(Arc::new(gateway))
}
