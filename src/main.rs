mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router,
    service::token::TokenService,
    startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let payment_gateway = startup::setup_payment_gateway(&config, http_client)?;
    let tokens = TokenService::new(&config.access_token_secret, config.token_ttl);

    let state = AppState::new(
        db,
        tokens,
        payment_gateway,
        config.payment_currency.clone(),
    );

    let app = router::router()
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|e| InternalError::Bind(config.port, e))?;

    tracing::info!("Enrollment server listening on port {}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(InternalError::Serve)?;

    Ok(())
}
