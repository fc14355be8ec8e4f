//! Runtime configuration
//!
//! Built from the parsed command line (which already folds in environment
//! variables and `.env`) and validated once at startup.

use std::net::SocketAddr;
use std::time::Duration;

use axum::http::HeaderValue;
use clap::ValueEnum;
use thiserror::Error;

use crate::cli::Cli;
use crate::data::client::DEFAULT_BASE_URL;
use crate::service::DEFAULT_CACHE_TTL;

/// Default origin of the front-end dev server
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Errors in the startup configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The provider base URL is not an http(s) URL
    #[error("Invalid base URL: '{0}'. Expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// A CORS origin is not a valid header value
    #[error("Invalid CORS origin: '{0}'")]
    InvalidOrigin(String),

    /// A duration that must be positive was zero
    #[error("{0} must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Origins allowed to call the API from a browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    Any,
    List(Vec<HeaderValue>),
}

/// Validated service configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Provider base URL, e.g. `https://api.spacexdata.com/v4`
    pub base_url: String,
    /// Address the HTTP server binds to
    pub listen_addr: SocketAddr,
    pub cors: CorsOrigins,
    /// How long fetched snapshots stay fresh
    pub cache_ttl: Duration,
    /// Upper bound on handling one API request
    pub request_timeout: Duration,
    /// Upper bound on one upstream request
    pub upstream_timeout: Duration,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            cors: CorsOrigins::List(vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)]),
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout: Duration::from_secs(30),
            upstream_timeout: Duration::from_secs(10),
            log_format: LogFormat::Text,
        }
    }
}

impl Config {
    /// Creates a Config from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(Config)` with every value validated
    /// * `Err(ConfigError)` if a value is unusable
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let base_url = cli.base_url.trim().to_string();
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        if cli.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroDuration("request timeout"));
        }
        if cli.upstream_timeout_ms == 0 {
            return Err(ConfigError::ZeroDuration("upstream timeout"));
        }

        Ok(Self {
            base_url,
            listen_addr: cli.listen,
            cors: parse_origins(&cli.cors_allow_origins)?,
            cache_ttl: Duration::from_secs(cli.cache_ttl_secs),
            request_timeout: Duration::from_millis(cli.request_timeout_ms),
            upstream_timeout: Duration::from_millis(cli.upstream_timeout_ms),
            log_format: cli.log_format,
        })
    }
}

/// Parses the allowed origins; a `*` anywhere in the list allows every origin
fn parse_origins(origins: &[String]) -> Result<CorsOrigins, ConfigError> {
    let origins: Vec<&str> = origins
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    if origins.contains(&"*") {
        return Ok(CorsOrigins::Any);
    }

    origins
        .into_iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config_from(args: &[&str]) -> Result<Config, ConfigError> {
        let mut argv = vec!["launchtrack"];
        argv.extend_from_slice(args);
        Config::from_cli(&Cli::parse_from(argv))
    }

    #[test]
    fn test_parse_origins_list() {
        let cors = parse_origins(&[
            "http://localhost:5173".to_string(),
            " https://tracker.example.com ".to_string(),
        ])
        .unwrap();

        assert_eq!(
            cors,
            CorsOrigins::List(vec![
                HeaderValue::from_static("http://localhost:5173"),
                HeaderValue::from_static("https://tracker.example.com"),
            ])
        );
    }

    #[test]
    fn test_parse_origins_wildcard() {
        let cors = parse_origins(&["http://a.example".to_string(), "*".to_string()]).unwrap();
        assert_eq!(cors, CorsOrigins::Any);
    }

    #[test]
    fn test_parse_origins_rejects_invalid_header() {
        let result = parse_origins(&["http://bad\norigin".to_string()]);
        assert!(matches!(result, Err(ConfigError::InvalidOrigin(_))));
    }

    #[test]
    fn test_from_cli_applies_overrides() {
        let config = config_from(&[
            "--base-url",
            "http://localhost:9000/v4/",
            "--listen",
            "127.0.0.1:3000",
            "--cache-ttl-secs",
            "60",
            "--log-format",
            "json",
        ])
        .unwrap();

        assert_eq!(config.base_url, "http://localhost:9000/v4/");
        assert_eq!(config.listen_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.cache_ttl, Duration::from_secs(60));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_from_cli_rejects_non_http_base_url() {
        let result = config_from(&["--base-url", "ftp://api.example.com"]);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid base URL"));
    }

    #[test]
    fn test_from_cli_rejects_zero_request_timeout() {
        let result = config_from(&["--request-timeout-ms", "0"]);
        assert!(matches!(result, Err(ConfigError::ZeroDuration(_))));
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(
            config.cors,
            CorsOrigins::List(vec![HeaderValue::from_static(DEFAULT_CORS_ORIGIN)])
        );
    }
}
