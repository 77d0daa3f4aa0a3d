// SPDX-License-Identifier: MPL-2.0
//! Playback clock formatting.
//!
//! Durations are rendered as a UTC time of day and then trimmed, so the
//! player shows `0:05`, `1:05` or `1:00:05` rather than `00:00:05`.
//! Values past 24 hours wrap around like a wall clock; negative values
//! wrap backwards from midnight.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Default text shown when the duration is not a usable number.
pub const DEFAULT_CLOCK: &str = "00:00";

/// Default text with the sub-second suffix.
pub const DEFAULT_CLOCK_WITH_MS: &str = "00:00.00";

/// Formats a millisecond duration as a clock string.
///
/// With `keep_ms` the result keeps two fractional digits (centiseconds,
/// truncated). Invalid input yields [`DEFAULT_CLOCK`] or
/// [`DEFAULT_CLOCK_WITH_MS`]: NaN, infinities, and anything outside
/// chrono's representable range (roughly ±8.2e15 ms, years ±262,000).
///
/// # Examples
///
/// ```
/// use movie_maker::clock::ms_to_time;
///
/// assert_eq!(ms_to_time(65_000.0, false), "1:05");
/// assert_eq!(ms_to_time(5_000.0, false), "0:05");
/// assert_eq!(ms_to_time(3_723_000.0, false), "1:02:03");
/// assert_eq!(ms_to_time(65_432.0, true), "1:05.43");
/// ```
#[must_use]
pub fn ms_to_time(ms: f64, keep_ms: bool) -> String {
    let Some(stamp) = time_of_day(ms) else {
        return default_clock(keep_ms).to_string();
    };

    let width = if keep_ms { 11 } else { 8 };
    trim_leading_zeros(&stamp[..width])
}

/// Formats a [`Duration`] with [`ms_to_time`].
#[must_use]
pub fn format_duration(duration: Duration, keep_ms: bool) -> String {
    // Precision loss only matters beyond 2^53 ms, far outside the date range.
    #[allow(clippy::cast_precision_loss)]
    let ms = duration.as_millis() as f64;
    ms_to_time(ms, keep_ms)
}

fn default_clock(keep_ms: bool) -> &'static str {
    if keep_ms {
        DEFAULT_CLOCK_WITH_MS
    } else {
        DEFAULT_CLOCK
    }
}

/// Renders `HH:MM:SS.mmm` for the given millisecond offset from the epoch.
fn time_of_day(ms: f64) -> Option<String> {
    #[allow(clippy::cast_precision_loss)]
    let (min, max) = (
        DateTime::<Utc>::MIN_UTC.timestamp_millis() as f64,
        DateTime::<Utc>::MAX_UTC.timestamp_millis() as f64,
    );
    if !ms.is_finite() || ms < min || ms > max {
        return None;
    }

    // Bounded by chrono's range, so the cast cannot saturate.
    #[allow(clippy::cast_possible_truncation)]
    let millis = ms.trunc() as i64;
    let instant = DateTime::from_timestamp_millis(millis)?;
    Some(instant.format("%H:%M:%S%.3f").to_string())
}

/// Drops a `00:` hour segment, then a single leading zero of the first field.
fn trim_leading_zeros(clock: &str) -> String {
    let clock = clock.strip_prefix("00:").unwrap_or(clock);
    clock.strip_prefix('0').unwrap_or(clock).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn under_ten_minutes_has_single_minute_digit() {
        assert_eq!(ms_to_time(65_000.0, false), "1:05");
        assert_eq!(ms_to_time(5_000.0, false), "0:05");
        assert_eq!(ms_to_time(0.0, false), "0:00");
        assert_eq!(ms_to_time(599_999.0, false), "9:59");
    }

    #[test]
    fn under_an_hour_omits_hour_field() {
        assert_eq!(ms_to_time(600_000.0, false), "10:00");
        assert_eq!(ms_to_time(3_599_999.0, false), "59:59");
    }

    #[test]
    fn hour_field_has_no_leading_zero() {
        assert_eq!(ms_to_time(3_600_000.0, false), "1:00:00");
        assert_eq!(ms_to_time(3_723_000.0, false), "1:02:03");
        assert_eq!(ms_to_time(36_000_000.0, false), "10:00:00");
    }

    #[test]
    fn keep_ms_retains_centiseconds() {
        assert_eq!(ms_to_time(65_432.0, true), "1:05.43");
        assert_eq!(ms_to_time(999.0, true), "0:00.99");
        assert_eq!(ms_to_time(3_600_010.0, true), "1:00:00.01");
    }

    #[test]
    fn fractional_milliseconds_truncate() {
        assert_eq!(ms_to_time(1_999.9, true), "0:01.99");
    }

    #[test]
    fn wraps_after_a_day() {
        let day = 24.0 * 60.0 * 60.0 * 1000.0;
        assert_eq!(ms_to_time(day + 65_000.0, false), "1:05");
    }

    #[test]
    fn negative_values_wrap_back_from_midnight() {
        assert_eq!(ms_to_time(-5_000.0, false), "23:59:55");
    }

    #[test]
    fn invalid_input_returns_constant_default() {
        assert_eq!(ms_to_time(f64::NAN, false), "00:00");
        assert_eq!(ms_to_time(f64::NAN, true), "00:00.00");
        assert_eq!(ms_to_time(f64::INFINITY, false), "00:00");
        assert_eq!(ms_to_time(1e16, false), "00:00");
    }

    #[test]
    fn far_instants_inside_chrono_range_still_format() {
        assert_eq!(ms_to_time(8.0e15, false), "14:13:20");
        assert_eq!(ms_to_time(-8.0e15, false), "9:46:40");
    }

    #[test]
    fn instants_past_chrono_range_use_default() {
        assert_eq!(ms_to_time(8.3e15, false), "00:00");
        assert_eq!(ms_to_time(-8.4e15, true), "00:00.00");
    }

    #[test]
    fn sub_hour_values_match_minute_second_shape() {
        for ms in (0..3_600_000u32).step_by(7_919) {
            let text = ms_to_time(f64::from(ms), false);
            let (minutes, seconds) = text.split_once(':').expect("missing separator");
            assert!(!seconds.contains(':'), "unexpected hour field in {text}");
            assert_eq!(seconds.len(), 2, "{text}");
            assert!((1..=2).contains(&minutes.len()), "{text}");
            assert!(minutes.len() == 1 || !minutes.starts_with('0'), "{text}");
        }
    }

    #[test]
    fn format_duration_uses_whole_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(65_432), false), "1:05");
        assert_eq!(format_duration(Duration::from_secs(3_723), true), "1:02:03.00");
    }
}
