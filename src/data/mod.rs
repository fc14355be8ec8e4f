//! Core data models for the launch tracker
//!
//! This module contains the records decoded from the upstream launch-data
//! provider and the derived types served to API clients.

pub mod client;

pub use client::{LaunchDataClient, LaunchSource, UpstreamError};

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single launch as reported by the provider
///
/// `success` is tri-state: `None` means the outcome is unknown (upcoming
/// launches, or the provider has no verdict) and must never be read as a
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launch {
    /// Unique identifier
    pub id: String,
    /// Mission name
    pub name: String,
    /// Launch time in UTC
    pub date_utc: DateTime<Utc>,
    /// Outcome, if known
    #[serde(default)]
    pub success: Option<bool>,
    /// Id of the rocket that flew this launch
    pub rocket: String,
    /// Id of the launchpad used
    pub launchpad: String,
}

/// A rocket model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: String,
    pub name: String,
    /// Success rate percentage (0-100), if reported
    #[serde(default)]
    pub success_rate_pct: Option<u32>,
}

/// A launch site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Launchpad {
    pub id: String,
    pub name: String,
    /// Number of launch attempts from this pad, if reported
    #[serde(default)]
    pub launch_attempts: Option<u32>,
}

/// Criteria for narrowing the launch list
///
/// Every field is optional; an unset field places no constraint on its
/// dimension. Set fields are combined with logical AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchFilter {
    /// Earliest launch date, inclusive
    pub start_date: Option<NaiveDate>,
    /// Latest launch date, inclusive
    pub end_date: Option<NaiveDate>,
    /// Keep launches flown by any rocket with this exact name
    pub rocket_name: Option<String>,
    /// Keep launches with exactly this outcome
    pub success: Option<bool>,
    /// Keep launches from any launchpad with this exact name
    pub launchpad_name: Option<String>,
}

impl LaunchFilter {
    /// Returns true when no constraint is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Launch counts bucketed by calendar period (UTC)
///
/// Buckets with no launches are absent rather than zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchFrequency {
    /// Counts keyed by "YYYY-MM"
    pub monthly: BTreeMap<String, u32>,
    /// Counts keyed by "YYYY"
    pub yearly: BTreeMap<String, u32>,
}

/// Summary statistics recomputed on every request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub success_rate_by_rocket: BTreeMap<String, u32>,
    pub launch_count_by_launchpad: BTreeMap<String, u32>,
    pub launch_frequency: LaunchFrequency,
}
