//! Process wiring: logging, state construction, shutdown

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::api::AppState;
use crate::config::{Config, LogFormat};
use crate::data::LaunchDataClient;
use crate::service::{LaunchService, SnapshotCache};

/// Installs the global tracing subscriber; `RUST_LOG` overrides the `info` default
pub fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(false))
            .init(),
        LogFormat::Text => registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init(),
    }
}

/// Builds the upstream client, the snapshot cache and the service around them
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let client = LaunchDataClient::new(config.base_url.as_str(), config.upstream_timeout)
        .context("failed to build upstream HTTP client")?;
    info!(
        base_url = client.base_url(),
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "upstream provider configured"
    );

    let service = LaunchService::new(Arc::new(client), SnapshotCache::new(), config.cache_ttl);
    Ok(Arc::new(AppState::new(service)))
}

/// Resolves on Ctrl-C, or SIGTERM on unix
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl-C");
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
                tracing::error!(error = %e, "failed to listen for SIGTERM");
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
    info!("shutdown signal received");
}
