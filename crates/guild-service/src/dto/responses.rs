//! Response DTOs for API endpoints
//!
//! Every success payload carries `"success": true`; errors are rendered by
//! the API layer as `{"success": false, "error": msg}`. Keys are camelCase
//! to match the public contract.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use guild_core::{
    AttendanceRecordRow, MainAttendanceCount, MainEvent, ShiftReportRow, User, UserReportStats,
    UserWithAssignments,
};

// ============================================================================
// Common Responses
// ============================================================================

/// Plain acknowledgement with a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// A staff user as returned by the API
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            role: user.role.to_string(),
            email: user.email.clone(),
        }
    }
}

/// A single user wrapped in the standard success envelope
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub success: bool,
    pub user: UserView,
}

impl UserResponse {
    pub fn new(user: &User) -> Self {
        Self {
            success: true,
            user: UserView::from(user),
        }
    }
}

/// The caller's identity, including their current assignments
#[derive(Debug, Clone, Serialize)]
pub struct IdentityView {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "assignedMains")]
    pub assigned_mains: Vec<MainView>,
}

impl IdentityView {
    pub fn new(user: &User, assigned_mains: &[MainEvent]) -> Self {
        Self {
            user_id: user.user_id,
            username: user.username.clone(),
            role_name: user.role.to_string(),
            assigned_mains: assigned_mains.iter().map(MainView::from).collect(),
        }
    }
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub user: IdentityView,
}

impl LoginResponse {
    pub fn new(user: &User, assigned_mains: &[MainEvent]) -> Self {
        Self {
            success: true,
            user: IdentityView::new(user, assigned_mains),
        }
    }
}

/// Session status; anonymous callers get `authenticated: false`, not an
/// error
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub authenticated: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<IdentityView>,
}

impl StatusResponse {
    #[must_use]
    pub fn authenticated(identity: IdentityView) -> Self {
        Self {
            success: true,
            authenticated: true,
            user: Some(identity),
        }
    }

    #[must_use]
    pub fn anonymous() -> Self {
        Self {
            success: true,
            authenticated: false,
            user: None,
        }
    }
}

// ============================================================================
// Main Event Responses
// ============================================================================

/// A main event as returned by the API
#[derive(Debug, Clone, Serialize)]
pub struct MainView {
    #[serde(rename = "mainID")]
    pub main_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&MainEvent> for MainView {
    fn from(main: &MainEvent) -> Self {
        Self {
            main_id: main.main_id,
            name: main.name.clone(),
            description: main.description.clone(),
        }
    }
}

/// List of main events
#[derive(Debug, Serialize)]
pub struct MainsResponse {
    pub success: bool,
    pub mains: Vec<MainView>,
}

impl MainsResponse {
    pub fn new(mains: &[MainEvent]) -> Self {
        Self {
            success: true,
            mains: mains.iter().map(MainView::from).collect(),
        }
    }
}

// ============================================================================
// Attendance Responses
// ============================================================================

/// A staff attendance record with display names
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecordView {
    #[serde(rename = "attendanceID")]
    pub attendance_id: i64,
    pub date_and_time: DateTime<Utc>,
    pub status: String,
    pub created_by: String,
    #[serde(rename = "mainID")]
    pub main_id: i64,
    pub main_name: String,
}

impl From<&AttendanceRecordRow> for AttendanceRecordView {
    fn from(row: &AttendanceRecordRow) -> Self {
        Self {
            attendance_id: row.attendance_id,
            date_and_time: row.date_and_time,
            status: row.status.to_string(),
            created_by: row.created_by.clone(),
            main_id: row.main_id,
            main_name: row.main_name.clone(),
        }
    }
}

/// List of staff attendance records
#[derive(Debug, Serialize)]
pub struct RecordsResponse {
    pub success: bool,
    pub records: Vec<AttendanceRecordView>,
}

impl RecordsResponse {
    pub fn new(rows: &[AttendanceRecordRow]) -> Self {
        Self {
            success: true,
            records: rows.iter().map(AttendanceRecordView::from).collect(),
        }
    }
}

/// Acknowledgement for a new attendance record
#[derive(Debug, Serialize)]
pub struct SubmitAttendanceResponse {
    pub success: bool,
    #[serde(rename = "attendanceID")]
    pub attendance_id: i64,
}

impl SubmitAttendanceResponse {
    pub fn new(attendance_id: i64) -> Self {
        Self {
            success: true,
            attendance_id,
        }
    }
}

/// Per-main public attendance count
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MainAttendanceCountView {
    #[serde(rename = "mainID")]
    pub main_id: i64,
    pub main_name: String,
    pub attendance_count: i64,
}

impl From<&MainAttendanceCount> for MainAttendanceCountView {
    fn from(count: &MainAttendanceCount) -> Self {
        Self {
            main_id: count.main_id,
            main_name: count.main_name.clone(),
            attendance_count: count.attendance_count,
        }
    }
}

/// Public attendance counts over mains that received submissions
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: Vec<MainAttendanceCountView>,
}

impl StatsResponse {
    pub fn new(counts: &[MainAttendanceCount]) -> Self {
        Self {
            success: true,
            stats: counts.iter().map(MainAttendanceCountView::from).collect(),
        }
    }
}

/// Per-main breakdown for one day, including zero-count mains
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownResponse {
    pub success: bool,
    pub date: NaiveDate,
    pub total_attendees: i64,
    pub breakdown: Vec<MainAttendanceCountView>,
}

impl BreakdownResponse {
    pub fn new(date: NaiveDate, total_attendees: i64, counts: &[MainAttendanceCount]) -> Self {
        Self {
            success: true,
            date,
            total_attendees,
            breakdown: counts.iter().map(MainAttendanceCountView::from).collect(),
        }
    }
}

// ============================================================================
// User Management Responses
// ============================================================================

/// A user with their assigned mains
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserWithAssignmentsView {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub assigned_mains: Vec<MainView>,
}

/// List of users with roles and assignments
#[derive(Debug, Serialize)]
pub struct UsersResponse {
    pub success: bool,
    pub users: Vec<UserWithAssignmentsView>,
}

impl UsersResponse {
    pub fn new(users: &[UserWithAssignments]) -> Self {
        Self {
            success: true,
            users: users
                .iter()
                .map(|u| UserWithAssignmentsView {
                    user_id: u.user.user_id,
                    username: u.user.username.clone(),
                    role: u.user.role.to_string(),
                    email: u.user.email.clone(),
                    assigned_mains: u.assigned_mains.iter().map(MainView::from).collect(),
                })
                .collect(),
        }
    }
}

// ============================================================================
// Shift Report Responses
// ============================================================================

/// A shift report with its score breakdown
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportView {
    #[serde(rename = "logoutID")]
    pub logout_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    pub position: String,
    pub date_time: DateTime<Utc>,
    pub attendees: i64,
    pub dropped_links: i64,
    pub recruits: i64,
    pub nicknames_set: i64,
    pub game_handled: i64,
    pub total_score: i64,
}

impl From<&ShiftReportRow> for ReportView {
    fn from(row: &ShiftReportRow) -> Self {
        Self {
            logout_id: row.report.logout_id,
            user_id: row.report.user_id,
            username: row.username.clone(),
            position: row.report.position.clone(),
            date_time: row.report.date_time,
            attendees: row.report.counts.attendees,
            dropped_links: row.report.counts.dropped_links,
            recruits: row.report.counts.recruits,
            nicknames_set: row.report.counts.nicknames_set,
            game_handled: row.report.counts.game_handled,
            total_score: row.report.total_score,
        }
    }
}

/// Acknowledgement for a submitted shift report
#[derive(Debug, Serialize)]
pub struct SubmitReportResponse {
    pub success: bool,
    pub record: ReportView,
}

impl SubmitReportResponse {
    pub fn new(row: &ShiftReportRow) -> Self {
        Self {
            success: true,
            record: ReportView::from(row),
        }
    }
}

/// List of shift reports
#[derive(Debug, Serialize)]
pub struct ReportsResponse {
    pub success: bool,
    pub records: Vec<ReportView>,
}

impl ReportsResponse {
    pub fn new(rows: &[ShiftReportRow]) -> Self {
        Self {
            success: true,
            records: rows.iter().map(ReportView::from).collect(),
        }
    }
}

/// Aggregated per-user shift statistics
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportStatsView {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    pub total_entries: i64,
    pub total_attendees: i64,
    pub total_dropped_links: i64,
    pub total_recruits: i64,
    pub total_nicknames_set: i64,
    pub total_game_handled: i64,
    pub cumulative_score: i64,
    pub average_score: f64,
}

impl From<&UserReportStats> for ReportStatsView {
    fn from(stats: &UserReportStats) -> Self {
        Self {
            user_id: stats.user_id,
            username: stats.username.clone(),
            total_entries: stats.total_entries,
            total_attendees: stats.total_attendees,
            total_dropped_links: stats.total_dropped_links,
            total_recruits: stats.total_recruits,
            total_nicknames_set: stats.total_nicknames_set,
            total_game_handled: stats.total_game_handled,
            cumulative_score: stats.cumulative_score,
            average_score: stats.average_score,
        }
    }
}

/// Aggregate statistics response
#[derive(Debug, Serialize)]
pub struct ReportStatsResponse {
    pub success: bool,
    pub stats: Vec<ReportStatsView>,
}

impl ReportStatsResponse {
    pub fn new(stats: &[UserReportStats]) -> Self {
        Self {
            success: true,
            stats: stats.iter().map(ReportStatsView::from).collect(),
        }
    }
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub redis: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool, redis: bool) -> Self {
        Self {
            status: if database && redis { "ready" } else { "degraded" },
            database,
            redis,
        }
    }
}
