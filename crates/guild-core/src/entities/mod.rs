//! Domain entities

mod attendance;
mod main_event;
mod report;
mod user;

pub use attendance::{AttendanceRecord, AttendanceStatus, MemberAttendance};
pub use main_event::MainEvent;
pub use report::{NewShiftReport, ShiftReport};
pub use user::{NewUser, User};
