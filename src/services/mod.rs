// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod aggregator;
pub mod formatter;
pub mod json_source;
pub mod loader;
pub mod presenter;
pub mod provider;

pub use aggregator::summarize;
pub use formatter::format;
pub use json_source::JsonFileSource;
pub use loader::{LoadError, SummaryLoader};
pub use presenter::{SummaryDisplay, SummaryPresenter};
pub use provider::{ProviderError, WorkoutProvider};
