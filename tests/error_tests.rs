// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{http::StatusCode, response::IntoResponse};
use workout_summary::error::AppError;
use workout_summary::services::{LoadError, ProviderError};

#[test]
fn test_load_errors_map_to_app_errors() {
    let err = AppError::from(LoadError::from(ProviderError::Unavailable));
    assert!(matches!(err, AppError::Unavailable));

    let err = AppError::from(LoadError::from(ProviderError::Authorization(
        "Store not ready".to_string(),
    )));
    assert!(matches!(err, AppError::Authorization(ref msg) if msg == "Store not ready"));

    let err = AppError::from(LoadError::from(ProviderError::Query("timeout".to_string())));
    assert!(matches!(err, AppError::QueryFailure(_)));

    let err = AppError::from(LoadError::Cancelled);
    assert!(matches!(err, AppError::Cancelled));
}

#[test]
fn test_status_codes() {
    assert_eq!(
        AppError::Unavailable.into_response().status(),
        StatusCode::SERVICE_UNAVAILABLE
    );
    assert_eq!(
        AppError::AuthorizationDenied("denied".to_string())
            .into_response()
            .status(),
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        AppError::QueryFailure("boom".to_string())
            .into_response()
            .status(),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(
        AppError::BadRequest("days".to_string())
            .into_response()
            .status(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        AppError::Internal(anyhow::anyhow!("disk on fire"))
            .into_response()
            .status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_display_messages() {
    assert_eq!(
        AppError::Unavailable.to_string(),
        "Health data is not available."
    );
    assert_eq!(
        AppError::QueryFailure("The operation couldn't be completed".to_string()).to_string(),
        "The operation couldn't be completed"
    );
}
