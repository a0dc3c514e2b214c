// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary loading workflow.
//!
//! Handles:
//! 1. Authorize with the workout provider
//! 2. Fetch workouts for the window
//! 3. Summarize and format into a view model
//!
//! Concurrent loads for the same window share one in-flight pipeline. Loads
//! for different windows run independently, unless started with
//! `load_superseding`, which aborts every other window first. `cancel()`
//! aborts all loads for everyone waiting on them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures_util::future::{AbortHandle, Abortable, BoxFuture, Shared};
use futures_util::FutureExt;

use crate::locale::FormatLocale;
use crate::models::ViewModel;
use crate::services::aggregator::summarize;
use crate::services::formatter::format;
use crate::services::provider::{ProviderError, WorkoutProvider};

type SharedLoad = Shared<BoxFuture<'static, Result<ViewModel, LoadError>>>;

struct InFlight {
    id: u64,
    load: SharedLoad,
    abort: AbortHandle,
}

/// Sequences authorize → fetch → summarize → format with single-flight
/// semantics per window.
pub struct SummaryLoader<P> {
    provider: Arc<P>,
    locale: FormatLocale,
    in_flight: Mutex<HashMap<u32, InFlight>>,
    next_id: AtomicU64,
}

impl<P: WorkoutProvider> SummaryLoader<P> {
    pub fn new(provider: P, locale: FormatLocale) -> Self {
        Self {
            provider: Arc::new(provider),
            locale,
            in_flight: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Load the view model for the trailing `window_days` days.
    ///
    /// Resolves to exactly one view model or one error. Joins a load already
    /// in flight for the same window and leaves other windows alone.
    pub async fn load(&self, window_days: u32) -> Result<ViewModel, LoadError> {
        let (id, load) = self.start_or_join(window_days, false);
        self.finish(window_days, id, load).await
    }

    /// Like [`load`](Self::load), but first aborts loads for every other
    /// window. Their waiters resolve to [`LoadError::Cancelled`].
    pub async fn load_superseding(&self, window_days: u32) -> Result<ViewModel, LoadError> {
        let (id, load) = self.start_or_join(window_days, true);
        self.finish(window_days, id, load).await
    }

    /// Abort every load in flight. Returns `true` if any was cancelled.
    pub fn cancel(&self) -> bool {
        let cancelled: Vec<(u32, InFlight)> = self.slots().drain().collect();
        for (window_days, current) in &cancelled {
            tracing::info!(window_days, "Cancelling summary load");
            current.abort.abort();
        }
        !cancelled.is_empty()
    }

    /// Whether any load is currently in flight.
    pub fn is_loading(&self) -> bool {
        !self.slots().is_empty()
    }

    async fn finish(
        &self,
        window_days: u32,
        id: u64,
        load: SharedLoad,
    ) -> Result<ViewModel, LoadError> {
        let result = load.await;

        let mut slots = self.slots();
        if slots.get(&window_days).is_some_and(|current| current.id == id) {
            slots.remove(&window_days);
        }

        result
    }

    fn start_or_join(&self, window_days: u32, supersede: bool) -> (u64, SharedLoad) {
        let mut slots = self.slots();

        if supersede {
            slots.retain(|&other_days, current| {
                if other_days == window_days {
                    return true;
                }
                tracing::info!(
                    previous_window_days = other_days,
                    window_days,
                    "Superseding in-flight summary load"
                );
                current.abort.abort();
                false
            });
        }

        if let Some(current) = slots.get(&window_days) {
            tracing::debug!(window_days, "Joining in-flight summary load");
            return (current.id, current.load.clone());
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let (abort, registration) = AbortHandle::new_pair();
        let pipeline = run_pipeline(self.provider.clone(), window_days, self.locale);
        let load = async move {
            Abortable::new(pipeline, registration)
                .await
                .unwrap_or(Err(LoadError::Cancelled))
        }
        .boxed()
        .shared();

        slots.insert(
            window_days,
            InFlight {
                id,
                load: load.clone(),
                abort,
            },
        );

        (id, load)
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<u32, InFlight>> {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn run_pipeline<P: WorkoutProvider>(
    provider: Arc<P>,
    window_days: u32,
    locale: FormatLocale,
) -> Result<ViewModel, LoadError> {
    tracing::debug!(window_days, "Authorizing workout provider");
    provider.authorize().await.inspect_err(|e| {
        tracing::warn!(error = %e, "Workout provider authorization failed");
    })?;

    let records = provider
        .fetch_workouts(window_days)
        .await
        .inspect_err(|e| {
            tracing::warn!(error = %e, window_days, "Workout fetch failed");
        })?;

    let summary = summarize(records);
    tracing::info!(
        window_days,
        workouts = summary.workout_count(),
        total_distance_meters = summary.total_distance_meters,
        "Workout summary computed"
    );

    Ok(format(&summary, window_days, &locale))
}

/// Failures of a summary load.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Summary load was cancelled")]
    Cancelled,
}

impl LoadError {
    /// Message for the renderer's error path.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
