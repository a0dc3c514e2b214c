// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Contract for health-data sources.

use std::future::Future;

use crate::models::WorkoutRecord;

/// Message shown when the device has no health data support.
pub const UNAVAILABLE_MESSAGE: &str = "Health data is not available.";

/// A source of recorded workouts.
///
/// `authorize` must succeed before `fetch_workouts` is called. Every call
/// resolves to a value or an explicit error.
pub trait WorkoutProvider: Send + Sync + 'static {
    /// Request read access to workout data.
    fn authorize(&self) -> impl Future<Output = Result<(), ProviderError>> + Send;

    /// Workouts from the trailing `window_days` days, newest first.
    fn fetch_workouts(
        &self,
        window_days: u32,
    ) -> impl Future<Output = Result<Vec<WorkoutRecord>, ProviderError>> + Send;
}

/// Failures reported by a workout provider.
///
/// The `Display` text is the message shown to the user.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Health data is not available.")]
    Unavailable,

    #[error("{0}")]
    AuthorizationDenied(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    Query(String),
}
