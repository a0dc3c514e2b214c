// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary API routes.

use crate::config::MAX_WINDOW_DAYS;
use crate::error::{AppError, Result};
use crate::models::ViewModel;
use crate::services::WorkoutProvider;
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn routes<P: WorkoutProvider>() -> Router<Arc<AppState<P>>> {
    Router::new().route("/api/summary", get(get_summary::<P>))
}

#[derive(Deserialize)]
struct SummaryQuery {
    /// Lookback window; the configured default when absent.
    /// Kept as text so malformed values get the JSON error body.
    days: Option<String>,
}

fn resolve_window_days(requested: Option<&str>, default_days: u32) -> Result<u32> {
    let Some(raw) = requested else {
        return Ok(default_days);
    };

    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|days| (1..=MAX_WINDOW_DAYS).contains(days))
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "'days' must be a whole number between 1 and {}",
                MAX_WINDOW_DAYS
            ))
        })
}

/// Get the formatted workout summary for the lookback window.
async fn get_summary<P: WorkoutProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<SummaryQuery>,
) -> Result<Json<ViewModel>> {
    let window_days = resolve_window_days(params.days.as_deref(), state.config.window_days)?;

    tracing::debug!(window_days, "Loading workout summary");

    let view_model = state.loader.load(window_days).await?;
    Ok(Json(view_model))
}
