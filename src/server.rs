//! HTTP server initialization and runtime setup.
//!
//! Builds the database pool, geocoder and calculation service, then runs the
//! Axum server until a shutdown signal arrives.

use crate::application::services::CalculationService;
use crate::config::Config;
use crate::infrastructure::geocoding::NominatimGeocoder;
use crate::infrastructure::persistence::PgCalculationRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (connections are opened on first use)
/// - Schema migrations (best-effort; the service starts without a database)
/// - Nominatim geocoder
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - The database URL or geocoder URL is malformed
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = create_pool(&config)?;

    match sqlx::migrate!("./migrations").run(&pool).await {
        Ok(()) => tracing::info!("Database migrations applied"),
        Err(e) => tracing::warn!(
            error = %e,
            "Could not apply migrations; history will be unavailable until the database is reachable"
        ),
    }

    let geocoder_url = Url::parse(&config.geocoder_url).context("Invalid GEOCODER_URL")?;
    let geocoder = NominatimGeocoder::new(&geocoder_url, &config.geocoder_user_agent)
        .context("Failed to create geocoder")?;
    tracing::info!(url = %geocoder.search_url(), "Geocoder ready");

    let repository = PgCalculationRepository::new(Arc::new(pool));
    let calculation_service = CalculationService::new(
        Arc::new(geocoder),
        Arc::new(repository),
        config.geocoder_delay(),
    );

    let state = AppState::new(Arc::new(calculation_service));
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(
        environment = %config.environment,
        "Listening on http://{addr}"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Builds the pool without connecting; the first query opens a connection.
fn create_pool(config: &Config) -> Result<PgPool> {
    let options: PgConnectOptions = config
        .database_url
        .parse()
        .context("Invalid DATABASE_URL")?;

    Ok(PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_lazy_with(options))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
