//! Fixed timestamps for cooldown tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

/// Returns a fixed reference instant used as "now" in tests.
///
/// # Returns
/// - `DateTime<Utc>` - 2025-01-01 12:00:00 UTC
pub fn reference_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .expect("Reference time must be unambiguous")
}

/// Returns the instant `minutes` minutes after `start`.
pub fn minutes_after(start: DateTime<Utc>, minutes: i64) -> DateTime<Utc> {
    start + Duration::minutes(minutes)
}
