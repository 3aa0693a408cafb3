//! HTTP server - Axum setup and router configuration

mod error;
pub mod pages;
pub mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
pub use state::AppState;

/// Install the global fmt subscriber (`RUST_LOG`, default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Bootstrap the schema, then serve until Ctrl+C / SIGTERM.
pub async fn run_server(database: &str, addr: &str) -> AppResult<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|_| AppError::InvalidAddress(addr.to_string()))?;

    info!("Opening database at {}", database);
    let pool = DbPool::new(database)?;
    init_db(&pool.conn)?;
    drop(pool);

    let app = create_router(AppState::new(database));

    info!("Starting timeclock on http://{}", addr);
    let listener = TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Create the Axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index))
        .route(
            "/employees",
            get(routes::list_employees).post(routes::create_employee),
        )
        .route("/employees/{id}/remove", post(routes::remove_employee))
        .route("/clock/{employee_id}/{kind}", post(routes::record_clock_event))
        .route("/records", get(routes::list_records))
        .route("/records/clear", post(routes::clear_records))
        .route("/export", get(routes::export_records))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating graceful shutdown...");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating graceful shutdown...");
        }
    }
}
