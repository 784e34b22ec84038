//! Request DTOs for API endpoints
//!
//! All body DTOs implement `Deserialize`; those carrying free-form input
//! also implement `Validate`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Staff login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 32, message = "Username must be 1-32 characters"))]
    pub username: String,

    #[validate(length(min = 1, max = 72, message = "Password must be 1-72 characters"))]
    pub password: String,
}

// ============================================================================
// User Management Requests
// ============================================================================

/// Create a staff account
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 32, message = "Username must be 2-32 characters"))]
    pub username: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    /// Role name: owner, elder, moderator, or handler
    pub role: String,
}

/// Change a user's role
#[derive(Debug, Clone, Deserialize)]
pub struct PromoteRequest {
    #[serde(rename = "userID")]
    pub user_id: i64,

    /// Role name: owner, elder, moderator, or handler
    pub role: String,
}

/// Assign a handler to a main event
#[derive(Debug, Clone, Deserialize)]
pub struct AssignHandlerRequest {
    #[serde(rename = "userID")]
    pub user_id: i64,
    #[serde(rename = "mainID")]
    pub main_id: i64,
}

// ============================================================================
// Attendance Requests
// ============================================================================

/// Staff-recorded attendance entry
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAttendanceRequest {
    #[serde(rename = "mainID")]
    pub main_id: i64,

    /// present, absent, or late; defaults to present
    pub status: Option<String>,
}

/// Public self-reported attendance submission
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PublicAttendanceRequest {
    #[serde(rename = "mainID")]
    pub main_id: i64,

    #[serde(rename = "memberCode")]
    #[validate(length(max = 64, message = "Member code must be at most 64 characters"))]
    pub member_code: Option<String>,
}

/// Query parameters for listing attendance records
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceListQuery {
    #[serde(rename = "mainID")]
    pub main_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

/// Query parameters for the per-main public attendance counts
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MemberStatsQuery {
    pub date: Option<NaiveDate>,
}

// ============================================================================
// Shift Report Requests
// ============================================================================

/// End-of-shift report submission
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    #[validate(length(min = 1, max = 64, message = "Position must be 1-64 characters"))]
    pub position: String,

    /// When the shift ended; also selects the day attendees are counted on
    pub date_time: DateTime<Utc>,

    #[validate(range(min = 0, message = "Dropped links must be non-negative"))]
    #[serde(default)]
    pub dropped_links: i64,

    #[validate(range(min = 0, message = "Recruits must be non-negative"))]
    #[serde(default)]
    pub recruits: i64,

    #[validate(range(min = 0, message = "Nicknames set must be non-negative"))]
    #[serde(default)]
    pub nicknames_set: i64,

    #[validate(range(min = 0, message = "Game handled must be non-negative"))]
    #[serde(default)]
    pub game_handled: i64,
}

/// Query parameters for listing shift reports.
///
/// The user filter only applies to callers who can see everyone's
/// reports; for everyone else it is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportListQuery {
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    pub date: Option<NaiveDate>,
}

/// Query parameters for the per-main attendance breakdown
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BreakdownQuery {
    pub date: Option<NaiveDate>,
}

/// Query parameters for aggregate shift statistics.
///
/// Like `ReportListQuery`, the user filter only applies to callers who
/// can see everyone's reports.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsParams {
    #[serde(rename = "userID")]
    pub user_id: Option<i64>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}
