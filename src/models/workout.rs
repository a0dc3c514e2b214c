// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout session record as delivered by the health-data source.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use super::ActivityType;

/// Where a workout took place, when the source recorded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Indoor,
    Outdoor,
}

impl Environment {
    /// Map the source's optional indoor flag onto an environment.
    pub fn from_indoor_flag(is_indoor: Option<bool>) -> Option<Self> {
        is_indoor.map(|indoor| {
            if indoor {
                Environment::Indoor
            } else {
                Environment::Outdoor
            }
        })
    }

    /// Title prefix for rows of this environment.
    pub fn label(self) -> &'static str {
        match self {
            Environment::Indoor => "Indoor",
            Environment::Outdoor => "Outdoor",
        }
    }
}

/// One completed exercise session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Distance in meters
    #[serde(default)]
    pub distance_meters: f64,
    /// Duration in seconds
    #[serde(default)]
    pub duration_seconds: f64,
    /// Active energy in kilocalories
    #[serde(default)]
    pub energy_kcal: f64,
    /// Elevation ascended in meters, if the source recorded it
    #[serde(default)]
    pub elevation_meters: Option<f64>,
    /// Indoor/outdoor, if the source recorded it
    #[serde(default)]
    pub environment: Option<Environment>,
    /// Start date/time
    pub start_time: DateTime<Utc>,
    /// Sport category
    pub activity_type: ActivityType,
}

impl WorkoutRecord {
    /// End of the session, derived from start and duration.
    ///
    /// Falls back to the start time when the duration does not fit in the
    /// representable date range.
    pub fn end_time(&self) -> DateTime<Utc> {
        let millis = (self.duration_seconds * 1000.0) as i64;
        TimeDelta::try_milliseconds(millis)
            .and_then(|duration| self.start_time.checked_add_signed(duration))
            .unwrap_or(self.start_time)
    }
}
