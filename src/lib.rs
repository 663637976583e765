pub mod config;
pub mod error;
pub mod fixtures;
pub mod logging;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use anyhow::Context;
use axum::{middleware::from_fn_with_state, routing::get, Extension, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::fixtures::{FixtureDir, SharedFixtures};
use crate::middleware::{cors_layer, dataset_middleware, DatasetGate};
use crate::routes::{data, health};

pub fn router(fixtures: SharedFixtures, gate: DatasetGate) -> Router {
    let datasets = Router::new()
        .route("/data/:dataset_id/", get(data::users))
        .route("/data/:dataset_id/users", get(data::users))
        .route("/data/:dataset_id/pemanfaatan", get(data::pemanfaatan))
        .route_layer(from_fn_with_state(gate, dataset_middleware));

    Router::new()
        .route("/health", get(health::health))
        .merge(datasets)
        .fallback(routes::not_found)
        .layer(Extension(fixtures))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

pub fn create_app(config: &Config) -> Router {
    let fixtures: SharedFixtures = Arc::new(FixtureDir::new(&config.data_dir));
    router(fixtures, DatasetGate::new(config.dataset_id.as_str()))
}

pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    if !config.data_dir.is_dir() {
        warn!(
            data_dir = %config.data_dir.display(),
            "fixture directory does not exist, every data request will fail"
        );
    }

    let app = create_app(&config);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        data_dir = %config.data_dir.display(),
        "mock data server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down");
}
