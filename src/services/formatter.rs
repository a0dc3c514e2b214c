// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Builds the display model for a workout summary.
//!
//! Produces two sections:
//! 1. "LAST {n} DAYS": duration/energy and distance/elevation cards
//! 2. "{count} ACTIVITIES": one row per workout, in source order

use crate::locale::{format_decimal_or_zero, FormatLocale};
use crate::models::{
    DisplayedSummary, DisplayedWorkout, Row, Section, SummaryItem, ViewModel, WorkoutRecord,
    WorkoutSummary,
};
use crate::time_utils::format_medium_date;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3600.0;
const METERS_PER_KILOMETER: f64 = 1000.0;

/// Format a summary for display.
pub fn format(summary: &WorkoutSummary, window_days: u32, locale: &FormatLocale) -> ViewModel {
    let workout_rows = summary
        .workouts
        .iter()
        .map(|workout| workout_row(workout, locale))
        .collect();

    ViewModel {
        sections: vec![
            Section {
                title: format!("LAST {} DAYS", window_days),
                rows: summary_rows(summary, locale),
            },
            Section {
                title: format!("{} ACTIVITIES", summary.workout_count()),
                rows: workout_rows,
            },
        ],
    }
}

fn summary_rows(summary: &WorkoutSummary, locale: &FormatLocale) -> Vec<Row> {
    let energy = format_decimal_or_zero(summary.total_energy_kcal.round(), locale);
    let distance =
        format_decimal_or_zero(summary.total_distance_meters / METERS_PER_KILOMETER, locale);
    let elevation = format_decimal_or_zero(summary.total_elevation_meters, locale);

    vec![
        Row::Summary(DisplayedSummary {
            item_one: SummaryItem::new(
                "Duration",
                format_duration(summary.total_duration_seconds),
                &["hr", "min"],
            ),
            item_two: SummaryItem::new("Active Energy", format!("{} kcal", energy), &["kcal"]),
        }),
        Row::Summary(DisplayedSummary {
            item_one: SummaryItem::new("Distance", format!("{} km", distance), &["km"]),
            item_two: SummaryItem::new("Elevation Gain", format!("{} m", elevation), &["m"]),
        }),
    ]
}

/// `"{h} hr {m} min"` from a total in seconds, truncating partial minutes.
fn format_duration(total_seconds: f64) -> String {
    if !total_seconds.is_finite() {
        return "0 hr 0 min".to_string();
    }
    let hours = (total_seconds / SECONDS_PER_HOUR).floor() as u64;
    let minutes = (total_seconds / SECONDS_PER_MINUTE).floor() as u64 % 60;
    format!("{} hr {} min", hours, minutes)
}

fn workout_row(workout: &WorkoutRecord, locale: &FormatLocale) -> Row {
    let distance = format_decimal_or_zero(workout.distance_meters / METERS_PER_KILOMETER, locale);
    let name = match workout.environment {
        Some(environment) => format!("{} {}", environment.label(), workout.activity_type.name()),
        None => workout.activity_type.name().to_string(),
    };

    Row::Workout(DisplayedWorkout {
        title: format!("{} km {}", distance, name),
        subtitle: format_medium_date(workout.start_time, locale),
        icon: workout.activity_type.icon(),
    })
}
