//! Shift-report scoring
//!
//! The point total is a fixed weighted sum over five activity counts.
//! The attendee count is always derived server-side from public attendance
//! submissions, never supplied by the caller.

/// Points per attendee handled
pub const ATTENDEE_POINTS: i64 = 100;
/// Points per invite link dropped
pub const DROPPED_LINK_POINTS: i64 = 50;
/// Points per recruit
pub const RECRUIT_POINTS: i64 = 500;
/// Points per nickname set
pub const NICKNAME_POINTS: i64 = 50;
/// Points per game handled
pub const GAME_HANDLED_POINTS: i64 = 1000;

/// The five activity counts scored on a shift report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityCounts {
    pub attendees: i64,
    pub dropped_links: i64,
    pub recruits: i64,
    pub nicknames_set: i64,
    pub game_handled: i64,
}

impl ActivityCounts {
    /// Compute the weighted point total.
    #[must_use]
    pub fn total_score(&self) -> i64 {
        self.attendees * ATTENDEE_POINTS
            + self.dropped_links * DROPPED_LINK_POINTS
            + self.recruits * RECRUIT_POINTS
            + self.nicknames_set * NICKNAME_POINTS
            + self.game_handled * GAME_HANDLED_POINTS
    }
}
