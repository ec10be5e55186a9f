//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use credit_common::{AppConfig, AppError, StaticKeyAuthorizer};
use credit_core::Authorizer;
use credit_db::{
    create_pool, PgActivityRepository, PgApiKeyAuthorizer, PgBalanceRepository, PgPool, PoolConfig,
};
use credit_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged outside the middleware so rate limiting never hides them.
///
/// # Errors
/// Returns `AppError::Config` when the middleware settings are invalid
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(Router::new()
        .merge(health_routes())
        .merge(api)
        .with_state(state))
}

/// Pick the API key authorizer: configured keys, or the host's `api_keys` table
pub fn create_authorizer(config: &AppConfig, pool: &PgPool) -> Arc<dyn Authorizer> {
    if config.auth.uses_static_keys() {
        info!(
            keys = config.auth.static_keys.len(),
            "Using API keys from configuration"
        );
        Arc::new(StaticKeyAuthorizer::new(&config.auth.static_keys))
    } else {
        info!("Using API keys from the api_keys table");
        Arc::new(PgApiKeyAuthorizer::new(pool.clone()))
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    let policy = config.ledger.policy()?;
    if !config.ledger.enabled {
        warn!("Credit system disabled; /credits routes will answer 404");
    }

    let service_context = ServiceContextBuilder::new()
        .balance_repo(Arc::new(PgBalanceRepository::new(pool.clone())))
        .activity_repo(Arc::new(PgActivityRepository::new(pool.clone())))
        .authorizer(create_authorizer(&config, &pool))
        .policy(policy)
        .enabled(config.ledger.enabled)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(AppError::internal)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid API_HOST/API_PORT: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
