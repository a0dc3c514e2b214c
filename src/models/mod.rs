// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity_type;
pub mod summary;
pub mod view_model;
pub mod workout;

pub use activity_type::{ActivityType, IconKey};
pub use summary::WorkoutSummary;
pub use view_model::{DisplayedSummary, DisplayedWorkout, Row, Section, SummaryItem, ViewModel};
pub use workout::{Environment, WorkoutRecord};
