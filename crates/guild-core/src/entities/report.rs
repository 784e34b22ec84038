//! Shift report entity ("logout record")
//!
//! Submitted once at the end of a staff member's shift; there is no edit
//! path after the initial submission.

use chrono::{DateTime, Utc};

use crate::value_objects::ActivityCounts;

/// A persisted end-of-shift report with its computed point total
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftReport {
    pub logout_id: i64,
    pub user_id: i64,
    pub position: String,
    pub date_time: DateTime<Utc>,
    pub counts: ActivityCounts,
    pub total_score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for persisting a new shift report; the id and timestamps are
/// assigned by storage
#[derive(Debug, Clone)]
pub struct NewShiftReport {
    pub user_id: i64,
    pub position: String,
    pub date_time: DateTime<Utc>,
    pub counts: ActivityCounts,
    pub total_score: i64,
}

impl NewShiftReport {
    /// Build a report with the total derived from the counts.
    #[must_use]
    pub fn new(
        user_id: i64,
        position: String,
        date_time: DateTime<Utc>,
        counts: ActivityCounts,
    ) -> Self {
        Self {
            user_id,
            position,
            date_time,
            counts,
            total_score: counts.total_score(),
        }
    }
}
