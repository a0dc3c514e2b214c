// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Workout Summary: rolling-window workout totals, formatted for display
//!
//! This crate aggregates recorded workout sessions into window totals and
//! builds a display-ready view model, with an HTTP API that serves it.

pub mod config;
pub mod error;
pub mod locale;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::{SummaryLoader, WorkoutProvider};

/// Shared application state.
pub struct AppState<P> {
    pub config: Config,
    pub loader: SummaryLoader<P>,
}

impl<P: WorkoutProvider> AppState<P> {
    pub fn new(config: Config, provider: P) -> Self {
        let loader = SummaryLoader::new(provider, config.locale);
        Self { config, loader }
    }
}
