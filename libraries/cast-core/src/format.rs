//! Display formatting for durations and published dates
//!
//! The rendering layer shows every duration as a clock string and every
//! published date in pt-BR, so both strings are precomputed once when an
//! episode is built instead of on every render.

use chrono::{DateTime, Locale, Utc};
use std::time::Duration;

/// Convert a duration into an `HH:MM:SS` clock string.
///
/// Every unit is zero-padded to two digits and the hour field is always
/// present, so short episodes render as `00:03:07`.
pub fn duration_to_time_string(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;

    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Format a published date for display, pt-BR style (`8 jan 21`).
pub fn format_published_date(published_at: DateTime<Utc>) -> String {
    published_at
        .format_localized("%-d %b %y", Locale::pt_BR)
        .to_string()
}
