// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Connects a summary load to a renderer.

use std::sync::Arc;

use crate::models::ViewModel;
use crate::services::loader::{LoadError, SummaryLoader};
use crate::services::provider::WorkoutProvider;

/// Renderer collaborator: draws a view model or shows an error message.
pub trait SummaryDisplay: Send + Sync {
    fn display(&self, view_model: &ViewModel);
    fn display_error(&self, message: &str);
}

/// Drives a load and hands the outcome to a [`SummaryDisplay`].
pub struct SummaryPresenter<P, D> {
    loader: Arc<SummaryLoader<P>>,
    display: D,
    window_days: u32,
}

impl<P: WorkoutProvider, D: SummaryDisplay> SummaryPresenter<P, D> {
    pub fn new(loader: Arc<SummaryLoader<P>>, display: D, window_days: u32) -> Self {
        Self {
            loader,
            display,
            window_days,
        }
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    /// Load the summary and deliver exactly one display call.
    ///
    /// Supersedes loads for other windows on the same loader. A cancelled
    /// load delivers nothing since the view is going away.
    pub async fn load_data(&self) {
        match self.loader.load_superseding(self.window_days).await {
            Ok(view_model) => self.display.display(&view_model),
            Err(LoadError::Cancelled) => {
                tracing::debug!(window_days = self.window_days, "Load cancelled, not displaying");
            }
            Err(e) => self.display.display_error(&e.user_message()),
        }
    }

    /// Cancel any load in flight. Call when the view is torn down.
    pub fn teardown(&self) {
        self.loader.cancel();
    }
}
