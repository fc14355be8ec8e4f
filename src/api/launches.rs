//! `GET /launches`

use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{error::ApiResult, AppState};
use crate::data::{Launch, LaunchFilter};

/// Errors in client-supplied filter input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid {field}: '{value}' is not a date in YYYY-MM-DD format")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid success: '{0}' is not a boolean")]
    InvalidBoolean(String),

    #[error("Malformed query string: {0}")]
    MalformedQuery(String),
}

/// Raw query parameters, validated into a `LaunchFilter`
#[derive(Debug, Default, Deserialize)]
pub struct LaunchQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub rocket_name: Option<String>,
    pub success: Option<String>,
    pub launchpad_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LaunchListResponse {
    pub launches: Vec<Launch>,
}

/// Treats `?param=` the same as an absent parameter
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_date(field: &'static str, value: Option<String>) -> Result<Option<NaiveDate>, ValidationError> {
    present(value)
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d")
                .map_err(|_| ValidationError::InvalidDate { field, value: v })
        })
        .transpose()
}

fn parse_bool(value: Option<String>) -> Result<Option<bool>, ValidationError> {
    present(value)
        .map(|v| match v.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ValidationError::InvalidBoolean(v)),
        })
        .transpose()
}

impl TryFrom<LaunchQuery> for LaunchFilter {
    type Error = ValidationError;

    fn try_from(query: LaunchQuery) -> Result<Self, Self::Error> {
        Ok(LaunchFilter {
            start_date: parse_date("start_date", query.start_date)?,
            end_date: parse_date("end_date", query.end_date)?,
            rocket_name: present(query.rocket_name),
            success: parse_bool(query.success)?,
            launchpad_name: present(query.launchpad_name),
        })
    }
}

async fn list_launches(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LaunchQuery>, QueryRejection>,
) -> ApiResult<Json<LaunchListResponse>> {
    let Query(query) = query.map_err(|e| ValidationError::MalformedQuery(e.body_text()))?;
    let filter = LaunchFilter::try_from(query)?;
    let launches = state.launch_service.filter_launches(&filter).await?;
    Ok(Json(LaunchListResponse { launches }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/launches", get(list_launches))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_query_is_empty_filter() {
        let filter = LaunchFilter::try_from(LaunchQuery::default()).unwrap();
        assert!(filter.is_empty());
    }

    #[test]
    fn test_full_query_parses() {
        let query = LaunchQuery {
            start_date: Some("2022-01-01".to_string()),
            end_date: Some("2023-12-31".to_string()),
            rocket_name: Some("Falcon 9".to_string()),
            success: Some("true".to_string()),
            launchpad_name: Some("LC-39A".to_string()),
        };

        let filter = LaunchFilter::try_from(query).unwrap();

        assert_eq!(
            filter,
            LaunchFilter {
                start_date: Some(date(2022, 1, 1)),
                end_date: Some(date(2023, 12, 31)),
                rocket_name: Some("Falcon 9".to_string()),
                success: Some(true),
                launchpad_name: Some("LC-39A".to_string()),
            }
        );
    }

    #[test]
    fn test_empty_values_are_absent() {
        let query = LaunchQuery {
            start_date: Some(String::new()),
            rocket_name: Some(String::new()),
            success: Some(String::new()),
            ..Default::default()
        };
        assert!(LaunchFilter::try_from(query).unwrap().is_empty());
    }

    #[test]
    fn test_boolean_spellings() {
        for (raw, expected) in [
            ("true", true),
            ("False", false),
            ("1", true),
            ("0", false),
            ("yes", true),
            ("off", false),
        ] {
            assert_eq!(parse_bool(Some(raw.to_string())), Ok(Some(expected)), "{raw}");
        }
    }

    #[test]
    fn test_invalid_boolean_is_rejected() {
        assert_eq!(
            parse_bool(Some("maybe".to_string())),
            Err(ValidationError::InvalidBoolean("maybe".to_string()))
        );
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let query = LaunchQuery {
            end_date: Some("2023-02-30".to_string()),
            ..Default::default()
        };

        let err = LaunchFilter::try_from(query).unwrap_err();

        assert_eq!(
            err,
            ValidationError::InvalidDate {
                field: "end_date",
                value: "2023-02-30".to_string()
            }
        );
        assert!(err.to_string().contains("end_date"));
    }

    #[test]
    fn test_datetime_is_not_a_date() {
        assert!(parse_date("start_date", Some("2022-05-15T00:00:00Z".to_string())).is_err());
    }
}
