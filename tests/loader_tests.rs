// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Summary loading workflow tests.
//!
//! These tests verify that:
//! 1. Authorization gates the fetch
//! 2. Concurrent loads for one window share a single fetch
//! 3. Loads for different windows run independently
//! 4. Cancellation and superseding resolve waiting loads as cancelled
//! 5. The presenter delivers exactly one display call per load

use std::sync::Arc;

use tokio::sync::Semaphore;
use workout_summary::locale::FormatLocale;
use workout_summary::models::{ActivityType, Environment, Row};
use workout_summary::services::{LoadError, ProviderError, SummaryLoader, SummaryPresenter};

mod common;
use common::{make_workout, wait_until, DisplayEvent, RecordingDisplay, StubProvider};

fn loader(provider: StubProvider) -> Arc<SummaryLoader<StubProvider>> {
    Arc::new(SummaryLoader::new(provider, FormatLocale::en_us()))
}

#[tokio::test]
async fn test_load_produces_view_model() {
    let loader = loader(StubProvider::with_workouts(vec![make_workout(
        ActivityType::Running,
        5000.0,
        1800.0,
        Some(Environment::Outdoor),
        "2024-04-25T07:30:00Z",
    )]));

    let view_model = loader.load(30).await.expect("load should succeed");

    assert_eq!(view_model.sections[0].title, "LAST 30 DAYS");
    assert_eq!(view_model.sections[1].title, "1 ACTIVITIES");
    match &view_model.sections[1].rows[0] {
        Row::Workout(w) => assert_eq!(w.title, "5 km Outdoor Running"),
        Row::Summary(_) => panic!("expected workout row"),
    }
    assert!(!loader.is_loading());
}

#[tokio::test]
async fn test_authorization_failure_skips_fetch() {
    let loader = loader(StubProvider::failing_authorize(
        ProviderError::AuthorizationDenied("Access to workouts was denied".to_string()),
    ));

    let err = loader.load(30).await.unwrap_err();

    assert_eq!(err.user_message(), "Access to workouts was denied");
    assert_eq!(loader.provider().authorize_count(), 1);
    assert_eq!(loader.provider().fetch_count(), 0);
}

#[tokio::test]
async fn test_fetch_failure_is_reported() {
    let loader = loader(StubProvider::failing_fetch(ProviderError::Query(
        "The query timed out".to_string(),
    )));

    let err = loader.load(30).await.unwrap_err();
    assert_eq!(
        err,
        LoadError::Provider(ProviderError::Query("The query timed out".to_string()))
    );
}

#[tokio::test]
async fn test_concurrent_loads_share_one_fetch() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = loader(StubProvider::gated(vec![], gate.clone()));

    let first = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(30).await }
    });
    wait_until(|| loader.provider().fetch_count() == 1).await;

    let second = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(30).await }
    });
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;

    gate.add_permits(1);

    let first = first.await.expect("task join failed").expect("first load");
    let second = second.await.expect("task join failed").expect("second load");

    assert_eq!(first, second);
    assert_eq!(loader.provider().authorize_count(), 1);
    assert_eq!(loader.provider().fetch_count(), 1);
    assert!(!loader.is_loading());
}

#[tokio::test]
async fn test_sequential_loads_fetch_again() {
    let loader = loader(StubProvider::with_workouts(vec![]));

    loader.load(30).await.expect("first load");
    loader.load(30).await.expect("second load");

    assert_eq!(loader.provider().fetch_count(), 2);
}

#[tokio::test]
async fn test_cancel_resolves_in_flight_load() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = loader(StubProvider::gated(vec![], gate));

    let pending = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(30).await }
    });
    wait_until(|| loader.provider().fetch_count() == 1).await;

    assert!(loader.cancel());
    assert!(!loader.cancel());

    let result = pending.await.expect("task join failed");
    assert_eq!(result, Err(LoadError::Cancelled));
}

#[tokio::test]
async fn test_different_windows_load_independently() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = loader(StubProvider::gated(vec![], gate.clone()));

    let month = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(30).await }
    });
    wait_until(|| loader.provider().fetch_count() == 1).await;

    let week = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(7).await }
    });
    wait_until(|| loader.provider().fetch_count() == 2).await;

    gate.add_permits(2);

    let month = month.await.expect("task join failed").expect("month load");
    let week = week.await.expect("task join failed").expect("week load");

    assert_eq!(month.sections[0].title, "LAST 30 DAYS");
    assert_eq!(week.sections[0].title, "LAST 7 DAYS");
    assert!(!loader.is_loading());
}

#[tokio::test]
async fn test_cancel_aborts_every_window() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = loader(StubProvider::gated(vec![], gate));

    let month = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(30).await }
    });
    let week = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(7).await }
    });
    wait_until(|| loader.provider().fetch_count() == 2).await;

    assert!(loader.cancel());

    assert_eq!(month.await.expect("task join failed"), Err(LoadError::Cancelled));
    assert_eq!(week.await.expect("task join failed"), Err(LoadError::Cancelled));
    assert!(!loader.is_loading());
}

#[tokio::test]
async fn test_new_window_supersedes_in_flight_load() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = loader(StubProvider::gated(vec![], gate.clone()));

    let month = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load(30).await }
    });
    wait_until(|| loader.provider().fetch_count() == 1).await;

    let week = tokio::spawn({
        let loader = loader.clone();
        async move { loader.load_superseding(7).await }
    });
    wait_until(|| loader.provider().fetch_count() == 2).await;

    let month = month.await.expect("task join failed");
    assert_eq!(month, Err(LoadError::Cancelled));

    gate.add_permits(1);
    let week = week.await.expect("task join failed").expect("week load");
    assert_eq!(week.sections[0].title, "LAST 7 DAYS");
}

#[tokio::test]
async fn test_presenter_displays_view_model_once() {
    let loader = loader(StubProvider::with_workouts(vec![]));
    let presenter = SummaryPresenter::new(loader, RecordingDisplay::default(), 30);

    presenter.load_data().await;

    let events = presenter.display().events();
    assert_eq!(events.len(), 1);
    match &events[0] {
        DisplayEvent::ViewModel(vm) => assert_eq!(vm.sections[1].title, "0 ACTIVITIES"),
        DisplayEvent::Error(msg) => panic!("unexpected error: {}", msg),
    }
}

#[tokio::test]
async fn test_presenter_displays_unavailable_message() {
    let loader = loader(StubProvider::failing_authorize(ProviderError::Unavailable));
    let presenter = SummaryPresenter::new(loader, RecordingDisplay::default(), 30);

    presenter.load_data().await;

    assert_eq!(
        presenter.display().events(),
        vec![DisplayEvent::Error("Health data is not available.".to_string())]
    );
}

#[tokio::test]
async fn test_presenter_teardown_displays_nothing() {
    let gate = Arc::new(Semaphore::new(0));
    let loader = loader(StubProvider::gated(vec![], gate));
    let presenter = Arc::new(SummaryPresenter::new(
        loader.clone(),
        RecordingDisplay::default(),
        30,
    ));

    let pending = tokio::spawn({
        let presenter = presenter.clone();
        async move { presenter.load_data().await }
    });
    wait_until(|| loader.provider().fetch_count() == 1).await;

    presenter.teardown();
    pending.await.expect("task join failed");

    assert!(presenter.display().events().is_empty());
}
