// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reduces a window of workouts into cumulative totals.

use crate::models::{WorkoutRecord, WorkoutSummary};

/// Sum distance, duration, energy and elevation over `records`.
///
/// Records are kept verbatim and in order. Absent elevation counts as 0 in
/// the total but stays absent on the record itself.
pub fn summarize(records: Vec<WorkoutRecord>) -> WorkoutSummary {
    let mut summary = WorkoutSummary::default();

    for record in &records {
        summary.total_distance_meters += record.distance_meters;
        summary.total_duration_seconds += record.duration_seconds;
        summary.total_energy_kcal += record.energy_kcal;
        summary.total_elevation_meters += record.elevation_meters.unwrap_or(0.0);
    }

    summary.workouts = records;
    summary
}
