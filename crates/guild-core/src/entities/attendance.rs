//! Attendance entities
//!
//! Two distinct record types: staff-recorded attendance taken on a member's
//! behalf, and public self-reported attendance keyed by submitter IP. They
//! intentionally live in separate tables with no reconciliation.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Status of a staff-recorded attendance entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    /// Status name as stored in the database.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "late" => Ok(Self::Late),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

/// Attendance recorded by staff on a member's behalf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceRecord {
    pub attendance_id: i64,
    pub created_by_user_id: i64,
    pub main_id: i64,
    pub date_and_time: DateTime<Utc>,
    pub status: AttendanceStatus,
}

/// Public self-reported attendance, deduplicated per (main, IP, day)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberAttendance {
    pub id: i64,
    pub main_id: i64,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: String,
    pub member_code: Option<String>,
}
