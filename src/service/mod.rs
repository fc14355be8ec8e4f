//! Aggregation service
//!
//! `LaunchService` owns the cached fetches; `filter` and `stats` hold the pure
//! computations over the fetched snapshots.

pub mod filter;
mod launch_service;
pub mod stats;

#[cfg(test)]
mod fixtures;

pub use launch_service::{LaunchService, SnapshotCache, DEFAULT_CACHE_TTL};
