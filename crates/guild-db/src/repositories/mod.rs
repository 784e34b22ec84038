//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in guild-core.
//! Each repository handles database operations for a specific domain entity.
//! Every caller-supplied filter is bound as a query parameter.

mod assignment;
mod attendance;
mod error;
mod main;
mod member_attendance;
mod report;
mod user;

pub use assignment::PgAssignmentRepository;
pub use attendance::PgAttendanceRepository;
pub use main::PgMainRepository;
pub use member_attendance::PgMemberAttendanceRepository;
pub use report::PgReportRepository;
pub use user::PgUserRepository;
