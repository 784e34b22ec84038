//! Shift report service
//!
//! End-of-shift report submission and the scoring views. The attendee
//! count is derived from the public submissions on the report's day
//! rather than taken from the request, scoped the same way the caller's
//! attendance views are.

use guild_core::{ActivityCounts, NewShiftReport, ReportQuery, ReportStatsQuery};
use tracing::{info, instrument};

use crate::dto::{
    CreateReportRequest, ReportListQuery, ReportStatsParams, ReportStatsResponse,
    ReportsResponse, SubmitReportResponse,
};

use super::access::{AccessPolicy, AuthenticatedUser};
use super::context::ServiceContext;
use super::error::ServiceResult;

/// Shift report service
pub struct ReportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReportService<'a> {
    /// Create a new ReportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit an end-of-shift report.
    ///
    /// The total score is computed server side; there is no edit path
    /// after submission.
    #[instrument(skip(self, request), fields(position = %request.position))]
    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        request: CreateReportRequest,
    ) -> ServiceResult<SubmitReportResponse> {
        let attendees = self
            .ctx
            .member_attendance_repo()
            .count_for_day(
                request.date_time.date_naive(),
                AccessPolicy::attendance_scope(caller),
            )
            .await?;

        let counts = ActivityCounts {
            attendees,
            dropped_links: request.dropped_links,
            recruits: request.recruits,
            nicknames_set: request.nicknames_set,
            game_handled: request.game_handled,
        };

        let report = self
            .ctx
            .report_repo()
            .create(&NewShiftReport::new(
                caller.user_id,
                request.position,
                request.date_time,
                counts,
            ))
            .await?;

        info!(
            logout_id = report.logout_id,
            total_score = report.total_score,
            "Shift report recorded"
        );

        Ok(SubmitReportResponse::new(&guild_core::ShiftReportRow {
            report,
            username: caller.username.clone(),
        }))
    }

    /// List shift reports visible to the caller, newest first
    #[instrument(skip(self, query))]
    pub async fn list(
        &self,
        caller: &AuthenticatedUser,
        query: ReportListQuery,
    ) -> ServiceResult<ReportsResponse> {
        // The scope wins for restricted callers; the explicit target filter
        // is only honored for callers who can see everyone's reports.
        let user_id = AccessPolicy::report_scope(caller).or(query.user_id);

        let rows = self
            .ctx
            .report_repo()
            .list(&ReportQuery {
                user_id,
                day: query.date,
            })
            .await?;

        Ok(ReportsResponse::new(&rows))
    }

    /// Aggregate per-user statistics over an optional date range
    #[instrument(skip(self, params))]
    pub async fn stats(
        &self,
        caller: &AuthenticatedUser,
        params: ReportStatsParams,
    ) -> ServiceResult<ReportStatsResponse> {
        let stats = self
            .ctx
            .report_repo()
            .stats(&ReportStatsQuery {
                // Same rule as list: the explicit target filter is only
                // honored for callers who can see everyone's reports.
                user_id: AccessPolicy::report_scope(caller).or(params.user_id),
                start_day: params.start_date,
                end_day: params.end_date,
            })
            .await?;

        Ok(ReportStatsResponse::new(&stats))
    }
}
