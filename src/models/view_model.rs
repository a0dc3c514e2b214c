// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display-ready model consumed by renderers.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use super::IconKey;

/// Sections of the summary screen, in display order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ViewModel {
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Section {
    pub title: String,
    pub rows: Vec<Row>,
}

/// A row is either a two-metric summary card or a single workout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum Row {
    Summary(DisplayedSummary),
    Workout(DisplayedWorkout),
}

/// Two paired metrics shown side by side.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DisplayedSummary {
    pub item_one: SummaryItem,
    pub item_two: SummaryItem,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct SummaryItem {
    pub title: String,
    pub value: String,
    /// Substrings of `value` (unit tokens) the renderer draws de-emphasized
    pub highlighted_substrings: Vec<String>,
}

impl SummaryItem {
    pub fn new(title: &str, value: String, units: &[&str]) -> Self {
        Self {
            title: title.to_string(),
            value,
            highlighted_substrings: units.iter().map(|u| u.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DisplayedWorkout {
    pub title: String,
    pub subtitle: String,
    pub icon: IconKey,
}
