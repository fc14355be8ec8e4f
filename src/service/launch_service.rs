//! Cached fetches and the aggregation operations built on them

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use futures::future::try_join3;
use tracing::debug;

use super::{filter, stats};
use crate::cache::CacheManager;
use crate::data::{
    Launch, LaunchFilter, LaunchFrequency, LaunchSource, Launchpad, Rocket, Statistics,
    UpstreamError,
};

/// Cache key for the launch snapshot
const LAUNCHES_CACHE_KEY: &str = "launches";
/// Cache key for the rocket snapshot
const ROCKETS_CACHE_KEY: &str = "rockets";
/// Cache key for the launchpad snapshot
const LAUNCHPADS_CACHE_KEY: &str = "launchpads";

/// Default time-to-live for every snapshot (one hour)
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// Snapshot caches for the three upstream collections
///
/// Constructed once at startup and handed to `LaunchService`; lives as long
/// as the service does.
#[derive(Default)]
pub struct SnapshotCache {
    launches: CacheManager<Vec<Launch>>,
    rockets: CacheManager<Vec<Rocket>>,
    launchpads: CacheManager<Vec<Launchpad>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Aggregation service over cached provider snapshots
///
/// Every operation is a pure function of the snapshots current at call time.
/// Upstream errors are returned unchanged; nothing partial is ever produced.
pub struct LaunchService {
    source: Arc<dyn LaunchSource>,
    cache: SnapshotCache,
    ttl: Duration,
}

impl LaunchService {
    pub fn new(source: Arc<dyn LaunchSource>, cache: SnapshotCache, ttl: Duration) -> Self {
        Self { source, cache, ttl }
    }

    pub async fn fetch_launches(&self) -> Result<Arc<Vec<Launch>>, UpstreamError> {
        self.cache
            .launches
            .get_or_compute(LAUNCHES_CACHE_KEY, self.ttl, || self.source.fetch_launches())
            .await
    }

    pub async fn fetch_rockets(&self) -> Result<Arc<Vec<Rocket>>, UpstreamError> {
        self.cache
            .rockets
            .get_or_compute(ROCKETS_CACHE_KEY, self.ttl, || self.source.fetch_rockets())
            .await
    }

    pub async fn fetch_launchpads(&self) -> Result<Arc<Vec<Launchpad>>, UpstreamError> {
        self.cache
            .launchpads
            .get_or_compute(LAUNCHPADS_CACHE_KEY, self.ttl, || {
                self.source.fetch_launchpads()
            })
            .await
    }

    /// Fetches all three snapshots concurrently, failing if any fetch fails
    async fn fetch_all(
        &self,
    ) -> Result<(Arc<Vec<Launch>>, Arc<Vec<Rocket>>, Arc<Vec<Launchpad>>), UpstreamError> {
        try_join3(
            self.fetch_launches(),
            self.fetch_rockets(),
            self.fetch_launchpads(),
        )
        .await
    }

    /// Returns the launches matching `criteria`, in provider order
    pub async fn filter_launches(&self, criteria: &LaunchFilter) -> Result<Vec<Launch>, UpstreamError> {
        let (launches, rockets, launchpads) = self.fetch_all().await?;
        let result = filter::filter_launches(&launches, &rockets, &launchpads, criteria);
        debug!(
            total = launches.len(),
            matched = result.len(),
            ?criteria,
            "filtered launches"
        );
        Ok(result)
    }

    pub async fn success_rate_by_rocket(&self) -> Result<BTreeMap<String, u32>, UpstreamError> {
        let rockets = self.fetch_rockets().await?;
        Ok(stats::success_rate_by_rocket(&rockets))
    }

    pub async fn launch_count_by_launchpad(&self) -> Result<BTreeMap<String, u32>, UpstreamError> {
        let launchpads = self.fetch_launchpads().await?;
        Ok(stats::launch_count_by_launchpad(&launchpads))
    }

    pub async fn launch_frequency(&self) -> Result<LaunchFrequency, UpstreamError> {
        let launches = self.fetch_launches().await?;
        Ok(stats::launch_frequency(&launches))
    }

    /// All statistics, computed from one concurrent fetch of every snapshot
    pub async fn statistics(&self) -> Result<Statistics, UpstreamError> {
        let (launches, rockets, launchpads) = self.fetch_all().await?;
        Ok(Statistics {
            success_rate_by_rocket: stats::success_rate_by_rocket(&rockets),
            launch_count_by_launchpad: stats::launch_count_by_launchpad(&launchpads),
            launch_frequency: stats::launch_frequency(&launches),
        })
    }
}
