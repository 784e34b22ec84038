//! User management handlers
//!
//! Account creation, role changes, handler assignment, and listings.

use axum::{extract::State, Json};
use guild_service::dto::{
    AssignHandlerRequest, CreateUserRequest, MainsResponse, MessageResponse, PromoteRequest,
    UserResponse, UsersResponse,
};
use guild_service::{AttendanceService, UserService};

use crate::extractors::{CurrentUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Create a staff account
///
/// POST /api/users/create
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.create_user(&caller, request).await?;
    Ok(Json(response))
}

/// Change a user's role
///
/// POST /api/users/promote
pub async fn promote(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<PromoteRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.promote(&caller, request).await?;
    Ok(Json(response))
}

/// Assign a handler to a main event
///
/// POST /api/users/assign-main
pub async fn assign_main(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    Json(request): Json<AssignHandlerRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    service.assign_handler(&caller, request).await?;
    Ok(Json(MessageResponse::new("Handler assigned")))
}

/// List all users with roles and assigned mains
///
/// GET /api/users/list
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
) -> ApiResult<Json<UsersResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.list_users(&caller).await?;
    Ok(Json(response))
}

/// List all main events; public, backs the submission form
///
/// GET /api/users/mains
pub async fn mains(State(state): State<AppState>) -> ApiResult<Json<MainsResponse>> {
    let service = AttendanceService::new(state.service_context());
    let response = service.list_mains().await?;
    Ok(Json(response))
}
