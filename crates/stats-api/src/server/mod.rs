//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use stats_cache::{RedisPool, TrendCache};
use stats_common::{AppConfig, AppError};
use stats_db::{
    bootstrap_schema, create_pool, PgStatsRepository, PgTrendRepository, PgUserRepository,
    PoolSettings,
};
use stats_service::{spawn_refresh_schedule, ServiceContextBuilder};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// How long shutdown waits for an in-flight refresh
const SCHEDULE_STOP_GRACE: Duration = Duration::from_secs(10);

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(router, &state);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool_settings = PoolSettings::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&pool_settings)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.bootstrap_schema {
        bootstrap_schema(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // Create Redis pool (connections are opened on first use)
    let redis_pool =
        RedisPool::from_config(&config.redis).map_err(|e| AppError::Cache(e.to_string()))?;
    let trend_cache = TrendCache::new(redis_pool.clone(), config.refresh.interval_secs);
    info!(
        ttl_secs = trend_cache.ttl_seconds(),
        "Redis trend cache configured"
    );

    // Vendor clients
    let sources = stats_scraper::build_sources(&config.scraper)
        .map_err(|e| AppError::Config(e.to_string()))?;

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let stats_repo = Arc::new(PgStatsRepository::new(pool.clone()));
    let trend_repo = Arc::new(PgTrendRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(Arc::new(redis_pool))
        .user_repo(user_repo)
        .stats_repo(stats_repo)
        .trend_repo(trend_repo)
        .profile_source(sources.profiles)
        .trend_source(sources.trends)
        .trend_cache(trend_cache)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server(
    app: Router,
    addr: &str,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Resolves on ctrl-c
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
///
/// Starts the refresh schedule alongside the HTTP server and stops both on
/// ctrl-c.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();
    let refresh_period = config.refresh.interval();

    // Create app state
    let state = create_app_state(config).await?;

    // Start the refresh schedule
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut schedule = spawn_refresh_schedule(
        state.service_context().refresher().clone(),
        refresh_period,
        shutdown_rx,
    );

    // Build application and serve
    let app = create_app(state);
    let result = run_server(app, &addr, shutdown_signal()).await;

    // Stop the schedule; a run still polling the vendor after the grace period is aborted
    let _ = shutdown_tx.send(true);
    match tokio::time::timeout(SCHEDULE_STOP_GRACE, &mut schedule).await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => warn!(error = %e, "Refresh schedule task ended abnormally"),
        Err(_) => {
            warn!("Refresh still running at shutdown, aborting");
            schedule.abort();
        }
    }

    result
}
