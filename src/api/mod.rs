//! HTTP routes
//!
//! Thin handlers that turn query strings into `LaunchFilter`s, call the
//! service, and serialize the result. Errors become `{code, message}` bodies.

mod error;
mod launches;
mod statistics;

pub use error::{ApiError, ApiResult};
pub use launches::{LaunchListResponse, LaunchQuery, ValidationError};

use std::sync::Arc;

use axum::{
    http::{Method, StatusCode},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{Config, CorsOrigins};
use crate::service::LaunchService;

/// State shared by every handler
pub struct AppState {
    pub launch_service: LaunchService,
}

impl AppState {
    pub fn new(launch_service: LaunchService) -> Self {
        Self { launch_service }
    }
}

pub async fn healthz() -> &'static str {
    "ok"
}

fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let allow_origin = match origins {
        CorsOrigins::Any => AllowOrigin::any(),
        CorsOrigins::List(list) => AllowOrigin::list(list.iter().cloned()),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any)
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .merge(launches::router())
        .merge(statistics::router())
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            config.request_timeout,
        ))
        .layer(cors_layer(&config.cors))
        .layer(TraceLayer::new_for_http())
}
