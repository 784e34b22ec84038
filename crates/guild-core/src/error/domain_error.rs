//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Main not found: {0}")]
    MainNotFound(i64),

    #[error("Attendance record not found: {0}")]
    AttendanceRecordNotFound(i64),

    #[error("Shift report not found: {0}")]
    ShiftReportNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid role specified: {0}")]
    InvalidRole(String),

    #[error("Invalid attendance status: {0}")]
    InvalidStatus(String),

    #[error("Username already exists")]
    UsernameAlreadyExists,

    #[error("You have already submitted attendance for this main today")]
    DuplicateSubmission,

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Missing permission: {0}")]
    MissingPermission(String),

    #[error("You are not assigned to this main")]
    NotAssignedToMain(i64),

    #[error("Attendance submissions are only allowed between 5:00 AM and 10:00 PM GMT+8")]
    SubmissionWindowClosed,

    #[error("Only handlers can be assigned to mains")]
    NotAHandler(i64),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl From<crate::value_objects::RoleParseError> for DomainError {
    fn from(e: crate::value_objects::RoleParseError) -> Self {
        Self::InvalidRole(e.0)
    }
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::MainNotFound(_) => "UNKNOWN_MAIN",
            Self::AttendanceRecordNotFound(_) => "UNKNOWN_ATTENDANCE_RECORD",
            Self::ShiftReportNotFound(_) => "UNKNOWN_SHIFT_REPORT",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::UsernameAlreadyExists => "USERNAME_EXISTS",
            Self::DuplicateSubmission => "DUPLICATE_SUBMISSION",

            // Authorization
            Self::MissingPermission(_) => "MISSING_PERMISSIONS",
            Self::NotAssignedToMain(_) => "NOT_ASSIGNED_TO_MAIN",
            Self::SubmissionWindowClosed => "SUBMISSION_WINDOW_CLOSED",
            Self::NotAHandler(_) => "NOT_A_HANDLER",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::MainNotFound(_)
                | Self::AttendanceRecordNotFound(_)
                | Self::ShiftReportNotFound(_)
        )
    }

    /// Check if this is a validation error (maps to 400)
    ///
    /// Duplicate submission and username conflicts deliberately report as
    /// 400 rather than 409 to match the public API contract.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidRole(_)
                | Self::InvalidStatus(_)
                | Self::UsernameAlreadyExists
                | Self::DuplicateSubmission
        )
    }

    /// Check if this is an authorization error (maps to 403)
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::MissingPermission(_)
                | Self::NotAssignedToMain(_)
                | Self::SubmissionWindowClosed
                | Self::NotAHandler(_)
        )
    }
}
