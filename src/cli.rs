//! Command-line interface parsing for the launch tracker
//!
//! Every flag can also be set through a `LAUNCHTRACK_*` environment variable
//! (or a `.env` file loaded before parsing). Flags win over the environment.

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{LogFormat, DEFAULT_CORS_ORIGIN};
use crate::data::client::DEFAULT_BASE_URL;

/// Launch tracker - serves filtered launches and launch statistics over HTTP
#[derive(Parser, Debug)]
#[command(name = "launchtrack")]
#[command(about = "Cached launch data API with filtering and statistics")]
#[command(version)]
pub struct Cli {
    /// Base URL of the launch-data provider
    #[arg(long, env = "LAUNCHTRACK_BASE_URL", value_name = "URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Address to listen on
    #[arg(long, env = "LAUNCHTRACK_LISTEN_ADDR", value_name = "ADDR", default_value = "0.0.0.0:8000")]
    pub listen: SocketAddr,

    /// Comma-separated origins allowed by CORS; `*` allows any origin
    #[arg(
        long,
        env = "LAUNCHTRACK_CORS_ALLOW_ORIGINS",
        value_name = "ORIGINS",
        value_delimiter = ',',
        default_value = DEFAULT_CORS_ORIGIN
    )]
    pub cors_allow_origins: Vec<String>,

    /// Seconds a fetched snapshot is served before it is refetched
    #[arg(long, env = "LAUNCHTRACK_CACHE_TTL_SECS", value_name = "SECS", default_value_t = 3600)]
    pub cache_ttl_secs: u64,

    /// Milliseconds allowed for handling one API request
    #[arg(long, env = "LAUNCHTRACK_REQUEST_TIMEOUT_MS", value_name = "MS", default_value_t = 30_000)]
    pub request_timeout_ms: u64,

    /// Milliseconds allowed for one upstream request
    #[arg(long, env = "LAUNCHTRACK_UPSTREAM_TIMEOUT_MS", value_name = "MS", default_value_t = 10_000)]
    pub upstream_timeout_ms: u64,

    /// Log output format
    #[arg(long, env = "LAUNCHTRACK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}
