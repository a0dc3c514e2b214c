//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use chrono::FixedOffset;

use crate::locale::FormatLocale;

/// Default lookback window in days.
pub const DEFAULT_WINDOW_DAYS: u32 = 30;
/// Longest lookback window accepted from config or requests.
pub const MAX_WINDOW_DAYS: u32 = 365;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// JSON export the file-backed provider reads workouts from
    pub workouts_file: PathBuf,
    /// Lookback window used when a request does not specify one
    pub window_days: u32,
    /// Number and date conventions for display strings
    pub locale: FormatLocale,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            frontend_url: "http://localhost:5173".to_string(),
            workouts_file: PathBuf::from("data/workouts.json"),
            window_days: DEFAULT_WINDOW_DAYS,
            locale: FormatLocale::en_us(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let window_days = match env::var("SUMMARY_WINDOW_DAYS") {
            Ok(raw) => parse_window_days(&raw)?,
            Err(_) => DEFAULT_WINDOW_DAYS,
        };

        let locale_tag = env::var("SUMMARY_LOCALE").unwrap_or_else(|_| "en_US".to_string());
        let locale = FormatLocale::from_tag(&locale_tag).ok_or_else(|| {
            ConfigError::Invalid("SUMMARY_LOCALE", format!("unsupported locale {}", locale_tag))
        })?;

        let locale = match env::var("SUMMARY_UTC_OFFSET_MINUTES") {
            Ok(raw) => locale.with_utc_offset(parse_utc_offset(&raw)?),
            Err(_) => locale,
        };

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            workouts_file: env::var("WORKOUTS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/workouts.json")),
            window_days,
            locale,
        })
    }
}

/// Parse a window length, accepting `1..=MAX_WINDOW_DAYS`.
pub fn parse_window_days(raw: &str) -> Result<u32, ConfigError> {
    let days: u32 = raw.trim().parse().map_err(|_| {
        ConfigError::Invalid("SUMMARY_WINDOW_DAYS", format!("not a number: {}", raw))
    })?;

    if !(1..=MAX_WINDOW_DAYS).contains(&days) {
        return Err(ConfigError::Invalid(
            "SUMMARY_WINDOW_DAYS",
            format!("must be between 1 and {}", MAX_WINDOW_DAYS),
        ));
    }

    Ok(days)
}

fn parse_utc_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || {
        ConfigError::Invalid(
            "SUMMARY_UTC_OFFSET_MINUTES",
            format!("not a valid offset: {}", raw),
        )
    };

    let minutes: i32 = raw.trim().parse().map_err(|_| invalid())?;
    minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .ok_or_else(invalid)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}
