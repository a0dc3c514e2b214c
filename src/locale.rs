// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Locale-aware number formatting.
//!
//! Formatting settings are plain values passed to each call; nothing here
//! holds formatter state between calls.

use chrono::{FixedOffset, Locale, Offset, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Most fraction digits shown for any decimal value.
pub const MAX_FRACTION_DIGITS: u32 = 2;

/// Substituted for values that cannot be formatted.
pub const FORMAT_FALLBACK: &str = "0";

/// Number and date conventions used when building display strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatLocale {
    /// Locale for month names in dates
    pub date_locale: Locale,
    /// chrono pattern for a medium-style date (no time)
    pub medium_date_pattern: &'static str,
    /// Offset used to place workout start times on the caller's calendar
    pub utc_offset: FixedOffset,
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl Default for FormatLocale {
    fn default() -> Self {
        Self::en_us()
    }
}

impl FormatLocale {
    pub fn en_us() -> Self {
        Self {
            date_locale: Locale::en_US,
            medium_date_pattern: "%b %-d, %Y",
            utc_offset: utc(),
            decimal_separator: '.',
            grouping_separator: Some(','),
        }
    }

    /// Look up a built-in locale by tag (`en_US`, `en_GB`, `de_DE`, `fr_FR`).
    ///
    /// Hyphenated tags (`de-DE`) are accepted too.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let locale = match tag.replace('-', "_").as_str() {
            "en_US" => Self::en_us(),
            "en_GB" => Self {
                date_locale: Locale::en_GB,
                medium_date_pattern: "%-d %b %Y",
                ..Self::en_us()
            },
            "de_DE" => Self {
                date_locale: Locale::de_DE,
                medium_date_pattern: "%d.%m.%Y",
                utc_offset: utc(),
                decimal_separator: ',',
                grouping_separator: Some('.'),
            },
            "fr_FR" => Self {
                date_locale: Locale::fr_FR,
                medium_date_pattern: "%-d %b %Y",
                utc_offset: utc(),
                decimal_separator: ',',
                grouping_separator: Some('\u{202f}'),
            },
            _ => return None,
        };
        Some(locale)
    }

    /// Same conventions, shifted to a different UTC offset.
    pub fn with_utc_offset(self, utc_offset: FixedOffset) -> Self {
        Self { utc_offset, ..self }
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

/// Format a value with 0 to [`MAX_FRACTION_DIGITS`] fraction digits.
///
/// Rounds half away from zero on the shortest decimal representation, so
/// `12.345` becomes `12.35`. Trailing fraction zeros are dropped and the
/// integer part is grouped. Returns `None` for NaN, infinities and values
/// outside the decimal range.
pub fn format_decimal(value: f64, locale: &FormatLocale) -> Option<String> {
    if !value.is_finite() {
        return None;
    }

    // Parse the shortest round-trip text, not the binary value, so 1.005
    // rounds as written.
    let exact = value
        .to_string()
        .parse::<Decimal>()
        .ok()
        .or_else(|| Decimal::from_f64(value))?;
    let rounded = exact
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    let repr = rounded.to_string();
    let (sign, digits) = match repr.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", repr.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));

    let mut out = String::from(sign);
    out.push_str(&group_integer(int_part, locale.grouping_separator));
    if !frac_part.is_empty() {
        out.push(locale.decimal_separator);
        out.push_str(frac_part);
    }
    Some(out)
}

/// [`format_decimal`], with [`FORMAT_FALLBACK`] in place of failures.
pub fn format_decimal_or_zero(value: f64, locale: &FormatLocale) -> String {
    format_decimal(value, locale).unwrap_or_else(|| {
        tracing::debug!(value, "Value could not be formatted, using fallback");
        FORMAT_FALLBACK.to_string()
    })
}

fn group_integer(digits: &str, separator: Option<char>) -> String {
    let Some(separator) = separator else {
        return digits.to_string();
    };

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 * separator.len_utf8());
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(digit);
    }
    out
}
