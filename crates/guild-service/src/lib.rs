//! # guild-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AssignHandlerRequest, AttendanceListQuery, BreakdownQuery, CreateAttendanceRequest,
    CreateReportRequest, CreateUserRequest, HealthResponse, LoginRequest, MemberStatsQuery,
    MessageResponse, PromoteRequest, PublicAttendanceRequest, ReadinessResponse, ReportListQuery,
    ReportStatsParams, StatusResponse,
};
pub use services::{
    AttendanceService, AuthService, AuthenticatedUser, ReportService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, UserService,
};
