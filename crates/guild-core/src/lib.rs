//! # guild-core
//!
//! Domain layer containing entities, value objects, repository traits, and domain errors.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    AttendanceRecord, AttendanceStatus, MainEvent, MemberAttendance, NewShiftReport, NewUser,
    ShiftReport, User,
};
pub use error::DomainError;
pub use traits::{
    AssignmentRepository, AttendanceQuery, AttendanceRecordRow, AttendanceRepository,
    MainAttendanceCount, MainRepository, MemberAttendanceRepository, RepoResult, ReportQuery,
    ReportRepository, ReportStatsQuery, ShiftReportRow, UserReportStats, UserWithAssignments,
    UserRepository,
};
pub use value_objects::{
    is_within_submission_window, ActivityCounts, Capabilities, Role, RoleParseError,
    SUBMISSION_WINDOW_CLOSE_HOUR, SUBMISSION_WINDOW_OPEN_HOUR, SUBMISSION_WINDOW_UTC_OFFSET_HOURS,
};
