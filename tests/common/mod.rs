// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::Semaphore;
use workout_summary::config::Config;
use workout_summary::models::{ActivityType, Environment, ViewModel, WorkoutRecord};
use workout_summary::routes::create_router;
use workout_summary::services::{ProviderError, SummaryDisplay, WorkoutProvider};
use workout_summary::AppState;

/// In-memory provider with canned outcomes and call counters.
#[allow(dead_code)]
pub struct StubProvider {
    pub authorize_result: Result<(), ProviderError>,
    pub fetch_result: Result<Vec<WorkoutRecord>, ProviderError>,
    pub authorize_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    /// When set, each fetch takes one permit before returning
    pub gate: Option<Arc<Semaphore>>,
}

#[allow(dead_code)]
impl StubProvider {
    pub fn with_workouts(workouts: Vec<WorkoutRecord>) -> Self {
        Self {
            authorize_result: Ok(()),
            fetch_result: Ok(workouts),
            authorize_calls: AtomicUsize::new(0),
            fetch_calls: AtomicUsize::new(0),
            gate: None,
        }
    }

    pub fn failing_authorize(err: ProviderError) -> Self {
        Self {
            authorize_result: Err(err),
            ..Self::with_workouts(vec![])
        }
    }

    pub fn failing_fetch(err: ProviderError) -> Self {
        Self {
            fetch_result: Err(err),
            ..Self::with_workouts(vec![])
        }
    }

    pub fn gated(workouts: Vec<WorkoutRecord>, gate: Arc<Semaphore>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::with_workouts(workouts)
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn authorize_count(&self) -> usize {
        self.authorize_calls.load(Ordering::SeqCst)
    }
}

impl WorkoutProvider for StubProvider {
    async fn authorize(&self) -> Result<(), ProviderError> {
        self.authorize_calls.fetch_add(1, Ordering::SeqCst);
        self.authorize_result.clone()
    }

    async fn fetch_workouts(&self, _window_days: u32) -> Result<Vec<WorkoutRecord>, ProviderError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.gate {
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }
        self.fetch_result.clone()
    }
}

/// What a renderer was asked to show.
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum DisplayEvent {
    ViewModel(ViewModel),
    Error(String),
}

/// Renderer that records every call.
#[derive(Default)]
#[allow(dead_code)]
pub struct RecordingDisplay {
    pub events: Mutex<Vec<DisplayEvent>>,
}

#[allow(dead_code)]
impl RecordingDisplay {
    pub fn events(&self) -> Vec<DisplayEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl SummaryDisplay for RecordingDisplay {
    fn display(&self, view_model: &ViewModel) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::ViewModel(view_model.clone()));
    }

    fn display_error(&self, message: &str) {
        self.events
            .lock()
            .unwrap()
            .push(DisplayEvent::Error(message.to_string()));
    }
}

/// Build a workout record.
#[allow(dead_code)]
pub fn make_workout(
    activity_type: ActivityType,
    distance_meters: f64,
    duration_seconds: f64,
    environment: Option<Environment>,
    start_time: &str,
) -> WorkoutRecord {
    WorkoutRecord {
        distance_meters,
        duration_seconds,
        energy_kcal: 100.0,
        elevation_meters: None,
        environment,
        start_time: start_time.parse().expect("valid RFC3339 timestamp"),
        activity_type,
    }
}

/// Create a test app around a provider.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(provider: StubProvider) -> (axum::Router, Arc<AppState<StubProvider>>) {
    let state = Arc::new(AppState::new(Config::default(), provider));
    (create_router(state.clone()), state)
}

/// Poll until `check` holds, failing the test after two seconds.
#[allow(dead_code)]
pub async fn wait_until<F: Fn() -> bool>(check: F) {
    tokio::time::timeout(Duration::from_secs(2), async {
        while !check() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}
