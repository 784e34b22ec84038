//! Attendance database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use guild_core::{
    AttendanceRecord, AttendanceRecordRow, AttendanceStatus, DomainError, MemberAttendance,
};

/// Database model for the attendance_records table
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceRecordModel {
    pub attendance_id: i64,
    pub created_by_user_id: i64,
    pub main_id: i64,
    pub date_and_time: DateTime<Utc>,
    pub status: String,
}

impl TryFrom<AttendanceRecordModel> for AttendanceRecord {
    type Error = DomainError;

    fn try_from(model: AttendanceRecordModel) -> Result<Self, Self::Error> {
        let status: AttendanceStatus = model.status.parse()?;
        Ok(Self {
            attendance_id: model.attendance_id,
            created_by_user_id: model.created_by_user_id,
            main_id: model.main_id,
            date_and_time: model.date_and_time,
            status,
        })
    }
}

/// Attendance record joined with creator and main names for listing
#[derive(Debug, Clone, FromRow)]
pub struct AttendanceRowModel {
    pub attendance_id: i64,
    pub date_and_time: DateTime<Utc>,
    pub status: String,
    pub created_by: String,
    pub main_id: i64,
    pub main_name: String,
}

impl TryFrom<AttendanceRowModel> for AttendanceRecordRow {
    type Error = DomainError;

    fn try_from(model: AttendanceRowModel) -> Result<Self, Self::Error> {
        let status: AttendanceStatus = model.status.parse()?;
        Ok(Self {
            attendance_id: model.attendance_id,
            date_and_time: model.date_and_time,
            status,
            created_by: model.created_by,
            main_id: model.main_id,
            main_name: model.main_name,
        })
    }
}

/// Database model for the member_attendances table
#[derive(Debug, Clone, FromRow)]
pub struct MemberAttendanceModel {
    pub id: i64,
    pub main_id: i64,
    pub submitted_at: DateTime<Utc>,
    pub ip_address: String,
    pub member_code: Option<String>,
}

impl From<MemberAttendanceModel> for MemberAttendance {
    fn from(model: MemberAttendanceModel) -> Self {
        Self {
            id: model.id,
            main_id: model.main_id,
            submitted_at: model.submitted_at,
            ip_address: model.ip_address,
            member_code: model.member_code,
        }
    }
}
