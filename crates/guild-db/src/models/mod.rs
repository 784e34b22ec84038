//! Database models - SQLx-compatible structs for PostgreSQL tables

mod attendance;
mod main_event;
mod report;
mod user;

pub use attendance::{AttendanceRecordModel, AttendanceRowModel, MemberAttendanceModel};
pub use main_event::MainModel;
pub use report::{ReportRowModel, ReportStatsModel, ShiftReportModel};
pub use user::UserModel;
