// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Rolling-window workout totals.

use serde::Serialize;

use super::WorkoutRecord;

/// Totals over one query window plus the workouts they were computed from.
///
/// Each total equals the sum of the matching field over `workouts`, with
/// absent elevation counted as 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WorkoutSummary {
    /// Workouts in the order the source returned them
    pub workouts: Vec<WorkoutRecord>,
    pub total_distance_meters: f64,
    pub total_energy_kcal: f64,
    pub total_duration_seconds: f64,
    pub total_elevation_meters: f64,
}

impl WorkoutSummary {
    /// Number of workouts in the window.
    pub fn workout_count(&self) -> usize {
        self.workouts.len()
    }
}
