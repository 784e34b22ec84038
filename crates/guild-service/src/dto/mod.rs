//! Data transfer objects for the HTTP API

mod requests;
mod responses;

pub use requests::{
    AssignHandlerRequest, AttendanceListQuery, BreakdownQuery, CreateAttendanceRequest,
    CreateReportRequest, CreateUserRequest, LoginRequest, MemberStatsQuery,
    PublicAttendanceRequest, PromoteRequest, ReportListQuery, ReportStatsParams,
};
pub use responses::{
    AttendanceRecordView, BreakdownResponse, HealthResponse, IdentityView, LoginResponse,
    MainAttendanceCountView, MainView, MainsResponse, MessageResponse, ReadinessResponse,
    RecordsResponse, ReportStatsResponse, ReportStatsView, ReportView, ReportsResponse,
    StatsResponse, StatusResponse, SubmitAttendanceResponse, SubmitReportResponse, UserResponse,
    UserView, UserWithAssignmentsView, UsersResponse,
};
