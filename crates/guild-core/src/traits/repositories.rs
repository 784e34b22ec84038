//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation. Every filter in the query structs is bound
//! as a parameter by the implementation, never interpolated into SQL.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{
    AttendanceRecord, AttendanceStatus, MainEvent, MemberAttendance, NewShiftReport, NewUser,
    ShiftReport, User,
};
use crate::error::DomainError;
use crate::value_objects::Role;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// A user together with the mains assigned to them
#[derive(Debug, Clone)]
pub struct UserWithAssignments {
    pub user: User,
    pub assigned_mains: Vec<MainEvent>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, user_id: i64) -> RepoResult<Option<String>>;

    /// Create a new user, returning it with its storage-assigned id
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User>;

    /// Change a user's role
    async fn update_role(&self, user_id: i64, role: Role) -> RepoResult<()>;

    /// List all users with their role and assigned mains
    async fn list_with_assignments(&self) -> RepoResult<Vec<UserWithAssignments>>;
}

// ============================================================================
// Main Event Repository
// ============================================================================

#[async_trait]
pub trait MainRepository: Send + Sync {
    /// Find main event by ID
    async fn find_by_id(&self, main_id: i64) -> RepoResult<Option<MainEvent>>;

    /// List all main events ordered by name
    async fn list_all(&self) -> RepoResult<Vec<MainEvent>>;
}

// ============================================================================
// Handler Assignment Repository
// ============================================================================

#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Assign a handler to a main; assigning twice is a no-op
    async fn assign(&self, user_id: i64, main_id: i64) -> RepoResult<()>;

    /// Whether the user is currently assigned to the main
    async fn is_assigned(&self, user_id: i64, main_id: i64) -> RepoResult<bool>;

    /// All mains assigned to a user
    async fn mains_for_user(&self, user_id: i64) -> RepoResult<Vec<MainEvent>>;
}

// ============================================================================
// Staff Attendance Repository
// ============================================================================

/// Filters for listing staff attendance records.
///
/// `scope_user_id` restricts results to mains assigned to that user; it is
/// set for handler callers and left `None` for unrestricted roles.
#[derive(Debug, Clone, Default)]
pub struct AttendanceQuery {
    pub scope_user_id: Option<i64>,
    pub main_id: Option<i64>,
    pub day: Option<NaiveDate>,
}

/// A staff attendance record joined with display names for listing
#[derive(Debug, Clone)]
pub struct AttendanceRecordRow {
    pub attendance_id: i64,
    pub date_and_time: DateTime<Utc>,
    pub status: AttendanceStatus,
    pub created_by: String,
    pub main_id: i64,
    pub main_name: String,
}

#[async_trait]
pub trait AttendanceRepository: Send + Sync {
    /// Insert a staff attendance record, returning it with its id
    async fn create(
        &self,
        created_by_user_id: i64,
        main_id: i64,
        status: AttendanceStatus,
    ) -> RepoResult<AttendanceRecord>;

    /// Find a record by ID
    async fn find_by_id(&self, attendance_id: i64) -> RepoResult<Option<AttendanceRecord>>;

    /// Hard delete a record; unknown ids are an error, not a silent success
    async fn delete(&self, attendance_id: i64) -> RepoResult<()>;

    /// List records matching the query, newest first
    async fn list(&self, query: &AttendanceQuery) -> RepoResult<Vec<AttendanceRecordRow>>;
}

// ============================================================================
// Public Member Attendance Repository
// ============================================================================

/// Per-main count of public attendance submissions
#[derive(Debug, Clone)]
pub struct MainAttendanceCount {
    pub main_id: i64,
    pub main_name: String,
    pub attendance_count: i64,
}

#[async_trait]
pub trait MemberAttendanceRepository: Send + Sync {
    /// Insert a public submission.
    ///
    /// A second submission for the same (main, IP, calendar day) must fail
    /// with [`DomainError::DuplicateSubmission`], enforced by a storage
    /// uniqueness constraint rather than a prior existence check.
    async fn insert(
        &self,
        main_id: i64,
        ip_address: &str,
        member_code: Option<&str>,
    ) -> RepoResult<MemberAttendance>;

    /// Total submissions on a calendar day, optionally scoped to the mains
    /// assigned to `scope_user_id`
    async fn count_for_day(&self, day: NaiveDate, scope_user_id: Option<i64>) -> RepoResult<i64>;

    /// Per-main counts over mains that received submissions, optionally
    /// filtered by day and scoped to a handler's assignments
    async fn stats(
        &self,
        day: Option<NaiveDate>,
        scope_user_id: Option<i64>,
    ) -> RepoResult<Vec<MainAttendanceCount>>;

    /// Per-main counts for a day across all (or assigned) mains, including
    /// mains with zero submissions
    async fn breakdown_for_day(
        &self,
        day: NaiveDate,
        scope_user_id: Option<i64>,
    ) -> RepoResult<Vec<MainAttendanceCount>>;
}

// ============================================================================
// Shift Report Repository
// ============================================================================

/// Filters for listing shift reports; `user_id` is the visibility scope
/// already decided by the access policy
#[derive(Debug, Clone, Default)]
pub struct ReportQuery {
    pub user_id: Option<i64>,
    pub day: Option<NaiveDate>,
}

/// Date-range filters for aggregate shift statistics
#[derive(Debug, Clone, Default)]
pub struct ReportStatsQuery {
    pub user_id: Option<i64>,
    pub start_day: Option<NaiveDate>,
    pub end_day: Option<NaiveDate>,
}

/// A shift report joined with the submitter's username
#[derive(Debug, Clone)]
pub struct ShiftReportRow {
    pub report: ShiftReport,
    pub username: String,
}

/// Aggregate shift statistics for one user
#[derive(Debug, Clone)]
pub struct UserReportStats {
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

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Persist a new shift report, returning it with id and timestamps
    async fn create(&self, report: &NewShiftReport) -> RepoResult<ShiftReport>;

    /// List reports matching the query, newest first
    async fn list(&self, query: &ReportQuery) -> RepoResult<Vec<ShiftReportRow>>;

    /// Aggregate per-user statistics, highest cumulative score first
    async fn stats(&self, query: &ReportStatsQuery) -> RepoResult<Vec<UserReportStats>>;
}
