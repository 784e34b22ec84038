//! Public submission time window
//!
//! Public attendance is only accepted between 05:00 and 22:00 in the guild's
//! home timezone, a fixed UTC+8 offset. The gate looks at the hour only, so
//! 21:59 passes and 22:00 is rejected.

use chrono::{DateTime, Timelike, Utc};

/// Fixed offset of the guild's home timezone, in hours east of UTC
pub const SUBMISSION_WINDOW_UTC_OFFSET_HOURS: u32 = 8;
/// First accepting hour (inclusive), local to the offset
pub const SUBMISSION_WINDOW_OPEN_HOUR: u32 = 5;
/// First rejecting hour, local to the offset
pub const SUBMISSION_WINDOW_CLOSE_HOUR: u32 = 22;

/// Whether `now` falls inside the daily submission window.
#[must_use]
pub fn is_within_submission_window(now: DateTime<Utc>) -> bool {
    let local_hour = (now.hour() + SUBMISSION_WINDOW_UTC_OFFSET_HOURS) % 24;
    (SUBMISSION_WINDOW_OPEN_HOUR..SUBMISSION_WINDOW_CLOSE_HOUR).contains(&local_hour)
}
