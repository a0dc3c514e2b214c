// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::services::{LoadError, ProviderError};

/// Application error type that converts to HTTP responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Health data is not available.")]
    Unavailable,

    #[error("{0}")]
    AuthorizationDenied(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{0}")]
    QueryFailure(String),

    #[error("Summary load was cancelled")]
    Cancelled,

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LoadError> for AppError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Provider(ProviderError::Unavailable) => AppError::Unavailable,
            LoadError::Provider(ProviderError::AuthorizationDenied(msg)) => {
                AppError::AuthorizationDenied(msg)
            }
            LoadError::Provider(ProviderError::Authorization(msg)) => AppError::Authorization(msg),
            LoadError::Provider(ProviderError::Query(msg)) => AppError::QueryFailure(msg),
            LoadError::Cancelled => AppError::Cancelled,
        }
    }
}

/// JSON error response body
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    /// Message for display
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            AppError::Unavailable => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
            AppError::AuthorizationDenied(_) => (StatusCode::FORBIDDEN, "authorization_denied"),
            AppError::Authorization(_) => (StatusCode::FORBIDDEN, "authorization_error"),
            AppError::QueryFailure(msg) => {
                tracing::warn!(error = %msg, "Workout query failed");
                (StatusCode::BAD_GATEWAY, "query_failure")
            }
            AppError::Cancelled => (StatusCode::SERVICE_UNAVAILABLE, "cancelled"),
            AppError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            AppError::Internal(err) => {
                tracing::error!(error = %err, "Internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error")
            }
        };

        let message = match &self {
            AppError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        let body = ErrorResponse {
            error: error.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type Result<T> = std::result::Result<T, AppError>;
