//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use feedback_common::{AppConfig, AppError, StoreBackend};
use feedback_core::traits::{FeedbackRepository, ReportRepository};
use feedback_db::{
    create_pool, run_migrations, InMemoryStore, PgFeedbackRepository, PgReportRepository,
    PoolConfig,
};
use feedback_service::{KeywordClassifier, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let health = apply_middleware(health_routes());

    api.merge(health).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let (feedback_repo, report_repo): (Arc<dyn FeedbackRepository>, Arc<dyn ReportRepository>) =
        match &config.store {
            StoreBackend::Postgres(db_config) => {
                info!("Connecting to PostgreSQL...");
                let pool = create_pool(&PoolConfig::from(db_config))
                    .await
                    .map_err(|e| AppError::Database(e.to_string()))?;
                info!("PostgreSQL connection established");

                if db_config.run_migrations {
                    run_migrations(&pool)
                        .await
                        .map_err(|e| AppError::Database(e.to_string()))?;
                }

                (
                    Arc::new(PgFeedbackRepository::new(pool.clone())),
                    Arc::new(PgReportRepository::new(pool)),
                )
            }
            StoreBackend::Memory => {
                warn!("Using in-memory store; data is lost on restart");
                let store = Arc::new(InMemoryStore::new());
                (store.clone(), store)
            }
        };

    let service_context = ServiceContextBuilder::new()
        .feedback_repo(feedback_repo)
        .report_repo(report_repo)
        .classifier(Arc::new(KeywordClassifier::new()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until ctrl-c
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config.api.address().parse().map_err(|e| {
        AppError::Config(format!(
            "Invalid listen address {}: {e}",
            config.api.address()
        ))
    })?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
