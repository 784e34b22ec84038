//! Value objects - immutable domain values with behavior

mod role;
mod scoring;
mod window;

pub use role::{Capabilities, Role, RoleParseError};
pub use scoring::ActivityCounts;
pub use window::{
    is_within_submission_window, SUBMISSION_WINDOW_CLOSE_HOUR, SUBMISSION_WINDOW_OPEN_HOUR,
    SUBMISSION_WINDOW_UTC_OFFSET_HOURS,
};
