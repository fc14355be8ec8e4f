//! Errors returned to API clients as `{code, message}` JSON

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use super::launches::ValidationError;
use crate::data::UpstreamError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            // Mirror the provider's status; anything that is not an error
            // status (a stray 1xx/3xx) becomes a bad gateway.
            ApiError::Upstream(UpstreamError::Status { status, .. }) => {
                StatusCode::from_u16(*status)
                    .ok()
                    .filter(|s| s.is_client_error() || s.is_server_error())
                    .unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ApiError::Upstream(UpstreamError::Unavailable { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(UpstreamError::Decode { .. }) => StatusCode::BAD_GATEWAY,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let ApiError::Upstream(e) = &self {
            warn!(status = status.as_u16(), error = %e, "upstream request failed");
        }
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status_error(status: u16) -> ApiError {
        ApiError::Upstream(UpstreamError::Status {
            status,
            endpoint: "rockets".to_string(),
            body: "nope".to_string(),
        })
    }

    #[test]
    fn test_upstream_status_is_propagated() {
        assert_eq!(status_error(500).status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(status_error(404).status(), StatusCode::NOT_FOUND);
        assert_eq!(status_error(429).status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn test_non_error_upstream_status_becomes_bad_gateway() {
        assert_eq!(status_error(304).status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_decode_error_is_bad_gateway() {
        let source = serde_json::from_str::<Vec<u32>>("nope").unwrap_err();
        let err = ApiError::Upstream(UpstreamError::Decode {
            endpoint: "launches".to_string(),
            source,
        });
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_validation_error_is_bad_request() {
        let err = ApiError::Validation(ValidationError::InvalidBoolean("maybe".to_string()));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Invalid success: 'maybe' is not a boolean");
    }

    #[test]
    fn test_status_error_message_is_upstream_detail() {
        assert_eq!(status_error(500).to_string(), "Error fetching rockets: nope");
    }
}
