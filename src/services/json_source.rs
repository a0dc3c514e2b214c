// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout provider backed by a JSON export file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{ActivityType, Environment, WorkoutRecord};
use crate::services::provider::{ProviderError, WorkoutProvider};
use crate::time_utils::{format_utc_rfc3339, window_start};

/// Reads workouts from a JSON array of records on disk.
///
/// The file is re-read on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_records(&self) -> Result<Vec<WorkoutRecord>, ProviderError> {
        let json_data = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            ProviderError::Query(format!(
                "Failed to read workouts from {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let exported: Vec<ExportedWorkout> = serde_json::from_str(&json_data).map_err(|e| {
            ProviderError::Query(format!(
                "Failed to parse workouts in {}: {}",
                self.path.display(),
                e
            ))
        })?;

        exported
            .into_iter()
            .enumerate()
            .map(|(index, workout)| workout.into_record(index))
            .collect()
    }
}

/// One workout as written in the export file.
///
/// The indoor/outdoor flag may be given either as `environment` or as the
/// source's `is_indoor` boolean.
#[derive(Debug, Deserialize)]
struct ExportedWorkout {
    #[serde(default)]
    distance_meters: f64,
    #[serde(default)]
    duration_seconds: f64,
    #[serde(default)]
    energy_kcal: f64,
    #[serde(default)]
    elevation_meters: Option<f64>,
    #[serde(default)]
    environment: Option<Environment>,
    #[serde(default)]
    is_indoor: Option<bool>,
    start_time: DateTime<Utc>,
    activity_type: ActivityType,
}

impl ExportedWorkout {
    /// Validate measurements and convert into a record.
    fn into_record(self, index: usize) -> Result<WorkoutRecord, ProviderError> {
        let measurements = [
            ("distance_meters", Some(self.distance_meters)),
            ("duration_seconds", Some(self.duration_seconds)),
            ("energy_kcal", Some(self.energy_kcal)),
            ("elevation_meters", self.elevation_meters),
        ];
        for (field, value) in measurements {
            if let Some(value) = value.filter(|v| !v.is_finite() || *v < 0.0) {
                return Err(ProviderError::Query(format!(
                    "Invalid workout at index {}: {} must be a non-negative number, got {}",
                    index, field, value
                )));
            }
        }

        Ok(WorkoutRecord {
            distance_meters: self.distance_meters,
            duration_seconds: self.duration_seconds,
            energy_kcal: self.energy_kcal,
            elevation_meters: self.elevation_meters,
            environment: self
                .environment
                .or_else(|| Environment::from_indoor_flag(self.is_indoor)),
            start_time: self.start_time,
            activity_type: self.activity_type,
        })
    }
}

impl WorkoutProvider for JsonFileSource {
    async fn authorize(&self) -> Result<(), ProviderError> {
        match tokio::fs::try_exists(&self.path).await {
            Ok(true) => Ok(()),
            Ok(false) => {
                tracing::warn!(path = %self.path.display(), "Workout export not found");
                Err(ProviderError::Unavailable)
            }
            Err(e) => Err(ProviderError::Authorization(format!(
                "Cannot access {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn fetch_workouts(&self, window_days: u32) -> Result<Vec<WorkoutRecord>, ProviderError> {
        let records = self.read_records().await?;
        let total = records.len();

        let now = Utc::now();
        let selected = select_window(records, window_days, now);

        tracing::debug!(
            path = %self.path.display(),
            since = %format_utc_rfc3339(window_start(now, window_days)),
            total,
            selected = selected.len(),
            "Read workouts from export"
        );

        Ok(selected)
    }
}

/// Keep workouts starting within `[now - window_days, now]`, newest end first.
pub fn select_window(
    records: Vec<WorkoutRecord>,
    window_days: u32,
    now: DateTime<Utc>,
) -> Vec<WorkoutRecord> {
    let start = window_start(now, window_days);

    let mut selected: Vec<WorkoutRecord> = records
        .into_iter()
        .filter(|r| r.start_time >= start && r.start_time <= now)
        .collect();

    selected.sort_by(|a, b| b.end_time().cmp(&a.end_time()));
    selected
}
