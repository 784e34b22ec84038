//! Attendance handlers
//!
//! Public member intake plus staff-recorded attendance and its views.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use guild_service::dto::{
    AttendanceListQuery, CreateAttendanceRequest, MemberStatsQuery, MessageResponse,
    PublicAttendanceRequest, RecordsResponse, StatsResponse, SubmitAttendanceResponse,
};
use guild_service::AttendanceService;

use crate::extractors::{ClientIp, CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Public self-reported attendance submission
///
/// POST /api/attendance/member
pub async fn submit_member(
    State(state): State<AppState>,
    ClientIp(ip_address): ClientIp,
    ValidatedJson(request): ValidatedJson<PublicAttendanceRequest>,
) -> ApiResult<Json<SubmitAttendanceResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.submit_public(request, &ip_address).await?;
    Ok(Json(response))
}

/// Staff-recorded attendance entry
///
/// POST /api/attendance/records
pub async fn create_record(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<CreateAttendanceRequest>,
) -> ApiResult<Json<SubmitAttendanceResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.create(&caller, request).await?;
    Ok(Json(response))
}

/// Delete a staff attendance record
///
/// DELETE /api/attendance/records/:attendance_id
pub async fn delete_record(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Path(attendance_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = AttendanceService::new(state.service_context());
    service.delete(&caller, attendance_id).await?;
    Ok(Json(MessageResponse::new("Attendance record deleted")))
}

/// List staff attendance records with optional filters
///
/// GET /api/attendance/records
pub async fn list_records(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Query(query): Query<AttendanceListQuery>,
) -> ApiResult<Json<RecordsResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.list(&caller, query).await?;
    Ok(Json(response))
}

/// Per-main public attendance counts for an optional day
///
/// GET /api/attendance/member-stats
pub async fn member_stats(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Query(query): Query<MemberStatsQuery>,
) -> ApiResult<Json<StatsResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.stats(&caller, query.date).await?;
    Ok(Json(response))
}
