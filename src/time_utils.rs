// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Duration, SecondsFormat, Utc};

use crate::locale::FormatLocale;

/// Format a UTC timestamp as RFC3339 using a `Z` suffix.
pub fn format_utc_rfc3339(date: DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a timestamp as a medium-style date (no time) on the locale's calendar.
pub fn format_medium_date(date: DateTime<Utc>, locale: &FormatLocale) -> String {
    date.with_timezone(&locale.utc_offset)
        .format_localized(locale.medium_date_pattern, locale.date_locale)
        .to_string()
}

/// Start of a lookback window of `days` days ending at `end`.
pub fn window_start(end: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    end - Duration::days(i64::from(days))
}
