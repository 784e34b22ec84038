//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AssignmentRepository, AttendanceQuery, AttendanceRecordRow, AttendanceRepository,
    MainAttendanceCount, MainRepository, MemberAttendanceRepository, RepoResult, ReportQuery,
    ReportRepository, ReportStatsQuery, ShiftReportRow, UserReportStats, UserRepository,
    UserWithAssignments,
};
