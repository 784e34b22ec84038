//! Attendance service
//!
//! Staff-recorded attendance, the public submission intake, and the
//! attendance statistics views.

use chrono::Utc;
use guild_core::{
    is_within_submission_window, AttendanceQuery, AttendanceStatus, Capabilities, DomainError,
};
use tracing::{info, instrument};

use crate::dto::{
    AttendanceListQuery, BreakdownResponse, CreateAttendanceRequest, MainsResponse,
    PublicAttendanceRequest, RecordsResponse, StatsResponse, SubmitAttendanceResponse,
};

use super::access::{AccessPolicy, AuthenticatedUser};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Attendance service
pub struct AttendanceService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AttendanceService<'a> {
    /// Create a new AttendanceService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all main events; backs the public submission form
    #[instrument(skip(self))]
    pub async fn list_mains(&self) -> ServiceResult<MainsResponse> {
        let mains = self.ctx.main_repo().list_all().await?;
        Ok(MainsResponse::new(&mains))
    }

    /// Public self-reported attendance submission.
    ///
    /// Accepted only inside the daily submission window, and only once per
    /// (main, source IP, calendar day); the duplicate check is enforced by
    /// the storage layer.
    #[instrument(skip(self, request), fields(main_id = request.main_id, ip = %ip_address))]
    pub async fn submit_public(
        &self,
        request: PublicAttendanceRequest,
        ip_address: &str,
    ) -> ServiceResult<SubmitAttendanceResponse> {
        if !is_within_submission_window(Utc::now()) {
            return Err(ServiceError::Domain(DomainError::SubmissionWindowClosed));
        }

        self.ctx
            .main_repo()
            .find_by_id(request.main_id)
            .await?
            .ok_or(DomainError::MainNotFound(request.main_id))?;

        let submission = self
            .ctx
            .member_attendance_repo()
            .insert(request.main_id, ip_address, request.member_code.as_deref())
            .await?;

        info!(
            submission_id = submission.id,
            main_id = submission.main_id,
            "Public attendance recorded"
        );

        Ok(SubmitAttendanceResponse::new(submission.id))
    }

    /// Staff-recorded attendance entry.
    ///
    /// Handlers can only record against mains they are assigned to; the
    /// assignment is re-checked on every call.
    #[instrument(skip(self, request), fields(main_id = request.main_id))]
    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        request: CreateAttendanceRequest,
    ) -> ServiceResult<SubmitAttendanceResponse> {
        AccessPolicy::new(self.ctx)
            .require_for_main(caller, Capabilities::CREATE_ATTENDANCE, request.main_id)
            .await?;

        self.ctx
            .main_repo()
            .find_by_id(request.main_id)
            .await?
            .ok_or(DomainError::MainNotFound(request.main_id))?;

        let status = match request.status.as_deref() {
            Some(s) => s.parse::<AttendanceStatus>()?,
            None => AttendanceStatus::default(),
        };

        let record = self
            .ctx
            .attendance_repo()
            .create(caller.user_id, request.main_id, status)
            .await?;

        info!(
            attendance_id = record.attendance_id,
            main_id = record.main_id,
            status = %record.status,
            "Attendance recorded"
        );

        Ok(SubmitAttendanceResponse::new(record.attendance_id))
    }

    /// Delete a staff attendance record.
    ///
    /// Permission is evaluated against the main the target record belongs
    /// to, not against anything the caller supplies.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        caller: &AuthenticatedUser,
        attendance_id: i64,
    ) -> ServiceResult<()> {
        let record = self
            .ctx
            .attendance_repo()
            .find_by_id(attendance_id)
            .await?
            .ok_or(DomainError::AttendanceRecordNotFound(attendance_id))?;

        AccessPolicy::new(self.ctx)
            .require_for_main(caller, Capabilities::DELETE_ATTENDANCE, record.main_id)
            .await?;

        self.ctx.attendance_repo().delete(attendance_id).await?;

        info!(attendance_id, "Attendance record deleted");
        Ok(())
    }

    /// List staff attendance records, scoped to the caller's assignments
    /// for handlers
    #[instrument(skip(self, query))]
    pub async fn list(
        &self,
        caller: &AuthenticatedUser,
        query: AttendanceListQuery,
    ) -> ServiceResult<RecordsResponse> {
        let rows = self
            .ctx
            .attendance_repo()
            .list(&AttendanceQuery {
                scope_user_id: AccessPolicy::attendance_scope(caller),
                main_id: query.main_id,
                day: query.date,
            })
            .await?;

        Ok(RecordsResponse::new(&rows))
    }

    /// Public attendance counts per main, over mains that received
    /// submissions
    #[instrument(skip(self))]
    pub async fn stats(
        &self,
        caller: &AuthenticatedUser,
        date: Option<chrono::NaiveDate>,
    ) -> ServiceResult<StatsResponse> {
        let counts = self
            .ctx
            .member_attendance_repo()
            .stats(date, AccessPolicy::attendance_scope(caller))
            .await?;

        Ok(StatsResponse::new(&counts))
    }

    /// Per-main breakdown for one day, including mains with no submissions.
    /// Defaults to today.
    #[instrument(skip(self))]
    pub async fn breakdown(
        &self,
        caller: &AuthenticatedUser,
        date: Option<chrono::NaiveDate>,
    ) -> ServiceResult<BreakdownResponse> {
        let day = date.unwrap_or_else(|| Utc::now().date_naive());
        let scope = AccessPolicy::attendance_scope(caller);

        let counts = self
            .ctx
            .member_attendance_repo()
            .breakdown_for_day(day, scope)
            .await?;
        let total = self
            .ctx
            .member_attendance_repo()
            .count_for_day(day, scope)
            .await?;

        Ok(BreakdownResponse::new(day, total, &counts))
    }
}
