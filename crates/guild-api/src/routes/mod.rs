//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{attendance, auth, health, reports, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth_routes())
        .nest("/users", user_routes())
        .nest("/attendance", attendance_routes())
        .nest("/logout", report_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/status", get(auth::status))
}

/// User management routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(users::create))
        .route("/promote", post(users::promote))
        .route("/assign-main", post(users::assign_main))
        .route("/list", get(users::list))
        .route("/mains", get(users::mains))
}

/// Attendance routes, public intake included
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/member", post(attendance::submit_member))
        .route("/records", post(attendance::create_record))
        .route("/records", get(attendance::list_records))
        .route("/records/:attendance_id", delete(attendance::delete_record))
        .route("/member-stats", get(attendance::member_stats))
}

/// Shift report routes
fn report_routes() -> Router<AppState> {
    Router::new()
        .route("/submit", post(reports::submit))
        .route("/records", get(reports::records))
        .route("/attendance-breakdown", get(reports::attendance_breakdown))
        .route("/stats", get(reports::stats))
}
