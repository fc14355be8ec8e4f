//! Launch filtering
//!
//! Rocket and launchpad name filters are resolved to id sets first; launches
//! are then kept when they satisfy every set constraint. A single pass keeps
//! the fetch order and makes the constraint order irrelevant.

use std::collections::HashSet;

use crate::data::{Launch, LaunchFilter, Launchpad, Rocket};

/// An entity launches refer to by id
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

impl Named for Rocket {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Launchpad {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Ids of every entity whose name is exactly `name`
///
/// Names are not unique, so this may hold several ids, or none.
pub fn ids_named<'a, T: Named>(entities: &'a [T], name: &str) -> HashSet<&'a str> {
    entities
        .iter()
        .filter(|entity| entity.name() == name)
        .map(|entity| entity.id())
        .collect()
}

/// Returns the launches matching every constraint in `filter`, in input order
pub fn filter_launches(
    launches: &[Launch],
    rockets: &[Rocket],
    launchpads: &[Launchpad],
    filter: &LaunchFilter,
) -> Vec<Launch> {
    if filter.is_empty() {
        return launches.to_vec();
    }

    let rocket_ids = filter
        .rocket_name
        .as_deref()
        .map(|name| ids_named(rockets, name));
    let launchpad_ids = filter
        .launchpad_name
        .as_deref()
        .map(|name| ids_named(launchpads, name));

    launches
        .iter()
        .filter(|launch| {
            let date = launch.date_utc.date_naive();
            filter.start_date.map_or(true, |start| date >= start)
                && filter.end_date.map_or(true, |end| date <= end)
                && filter.success.map_or(true, |wanted| launch.success == Some(wanted))
                && rocket_ids
                    .as_ref()
                    .map_or(true, |ids| ids.contains(launch.rocket.as_str()))
                && launchpad_ids
                    .as_ref()
                    .map_or(true, |ids| ids.contains(launch.launchpad.as_str()))
        })
        .cloned()
        .collect()
}
