//! Summary statistics over fetched snapshots
//!
//! Name-keyed maps use last-write-wins: when two entities share a name, the
//! later one in fetch order replaces the earlier one's value.

use std::collections::BTreeMap;

use chrono::Datelike;

use crate::data::{Launch, LaunchFrequency, Launchpad, Rocket};

/// Success rate percentage per rocket name; a missing rate counts as 0
pub fn success_rate_by_rocket(rockets: &[Rocket]) -> BTreeMap<String, u32> {
    let mut rates = BTreeMap::new();
    for rocket in rockets {
        rates.insert(rocket.name.clone(), rocket.success_rate_pct.unwrap_or(0));
    }
    rates
}

/// Launch attempts per launchpad name; a missing count counts as 0
pub fn launch_count_by_launchpad(launchpads: &[Launchpad]) -> BTreeMap<String, u32> {
    let mut counts = BTreeMap::new();
    for pad in launchpads {
        counts.insert(pad.name.clone(), pad.launch_attempts.unwrap_or(0));
    }
    counts
}

/// Counts launches per UTC month ("YYYY-MM") and per UTC year ("YYYY")
pub fn launch_frequency(launches: &[Launch]) -> LaunchFrequency {
    let mut frequency = LaunchFrequency::default();

    for launch in launches {
        let year = launch.date_utc.year();
        let month = launch.date_utc.month();

        *frequency
            .monthly
            .entry(format!("{:04}-{:02}", year, month))
            .or_insert(0) += 1;
        *frequency.yearly.entry(format!("{:04}", year)).or_insert(0) += 1;
    }

    frequency
}
