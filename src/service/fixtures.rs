//! Sample records shared by the service tests

use chrono::{TimeZone, Utc};

use crate::data::{Launch, Launchpad, Rocket};

pub fn launch(id: &str, ymd: (i32, u32, u32), success: Option<bool>, rocket: &str, pad: &str) -> Launch {
    Launch {
        id: id.to_string(),
        name: format!("Launch {}", id),
        date_utc: Utc.with_ymd_and_hms(ymd.0, ymd.1, ymd.2, 0, 0, 0).unwrap(),
        success,
        rocket: rocket.to_string(),
        launchpad: pad.to_string(),
    }
}

pub fn rocket(id: &str, name: &str, success_rate_pct: Option<u32>) -> Rocket {
    Rocket {
        id: id.to_string(),
        name: name.to_string(),
        success_rate_pct,
    }
}

pub fn launchpad(id: &str, name: &str, launch_attempts: Option<u32>) -> Launchpad {
    Launchpad {
        id: id.to_string(),
        name: name.to_string(),
        launch_attempts,
    }
}

pub fn sample_launches() -> Vec<Launch> {
    vec![
        launch("1", (2022, 5, 15), Some(true), "rocket1", "pad1"),
        launch("2", (2023, 6, 20), Some(false), "rocket2", "pad2"),
        launch("3", (2023, 7, 10), Some(true), "rocket1", "pad1"),
    ]
}

pub fn sample_rockets() -> Vec<Rocket> {
    vec![
        rocket("rocket1", "Falcon 9", Some(90)),
        rocket("rocket2", "Falcon Heavy", Some(80)),
    ]
}

pub fn sample_launchpads() -> Vec<Launchpad> {
    vec![
        launchpad("pad1", "LC-39A", Some(10)),
        launchpad("pad2", "SLC-40", Some(5)),
    ]
}
