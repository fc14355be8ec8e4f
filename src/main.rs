//! Launch tracker - a read-only API over cached launch data
//!
//! Proxies a public launch-data provider, caches its launches, rockets and
//! launchpads, and serves filtered launch lists and summary statistics.

use clap::Parser;
use tracing::info;

use launchtrack::api::app_router;
use launchtrack::cli::Cli;
use launchtrack::config::Config;
use launchtrack::startup::{build_state, init_tracing, shutdown_signal};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = Config::from_cli(&cli)?;
    init_tracing(config.log_format);

    let state = build_state(&config)?;
    let router = app_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    info!("Listening on {}", config.listen_addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
