//! Shift report handlers
//!
//! End-of-shift submissions and the scoring views mounted under
//! /api/logout.

use axum::{
    extract::{Query, State},
    Json,
};
use guild_service::dto::{
    BreakdownQuery, BreakdownResponse, CreateReportRequest, ReportListQuery, ReportStatsParams,
    ReportStatsResponse, ReportsResponse, SubmitReportResponse,
};
use guild_service::{AttendanceService, ReportService};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Submit an end-of-shift report
///
/// POST /api/logout/submit
pub async fn submit(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateReportRequest>,
) -> ApiResult<Json<SubmitReportResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.create(&caller, request).await?;
    Ok(Json(response))
}

/// List shift reports visible to the caller
///
/// GET /api/logout/records
pub async fn records(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Query(query): Query<ReportListQuery>,
) -> ApiResult<Json<ReportsResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.list(&caller, query).await?;
    Ok(Json(response))
}

/// Per-main attendance breakdown for a required day
///
/// GET /api/logout/attendance-breakdown
pub async fn attendance_breakdown(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Query(query): Query<BreakdownQuery>,
) -> ApiResult<Json<BreakdownResponse>> {
    let date = query
        .date
        .ok_or_else(|| ApiError::invalid_query("date is required"))?;

    let service = AttendanceService::new(state.service_context());
    let response = service.breakdown(&caller, Some(date)).await?;
    Ok(Json(response))
}

/// Aggregate per-user statistics over an optional date range
///
/// GET /api/logout/stats
pub async fn stats(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Query(params): Query<ReportStatsParams>,
) -> ApiResult<Json<ReportStatsResponse>> {
    let service = ReportService::new(state.service_context());
    let response = service.stats(&caller, params).await?;
    Ok(Json(response))
}
