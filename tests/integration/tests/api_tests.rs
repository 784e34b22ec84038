//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Running Redis instance
//! - Environment variables: DATABASE_URL, REDIS_URL
//!
//! Staff accounts are seeded directly in the database because the API has
//! no self-registration. Public attendance intake is only open during the
//! submission window, so those tests branch on the current time.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use chrono::Utc;
use guild_core::is_within_submission_window;
use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;
use serde_json::json;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();
    let response = client.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();
    let response = client.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_login_returns_identity() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (user_id, username) = create_staff_user(&pool, "moderator").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client
        .post(
            "/api/auth/login",
            &json!({ "username": username, "password": TEST_PASSWORD }),
        )
        .await
        .unwrap();
    let body: LoginBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.user.user_id, user_id);
    assert_eq!(body.user.username, username);
    assert_eq!(body.user.role_name, "moderator");

    // Session cookie from login authenticates subsequent requests
    let response = client.get("/api/auth/status").await.unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(status.authenticated);
    assert_eq!(status.user.unwrap().user_id, user_id);
}

#[tokio::test]
async fn test_login_unknown_user_is_unauthorized() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client
        .post(
            "/api/auth/login",
            &json!({ "username": "no_such_user_ever", "password": "whatever1" }),
        )
        .await
        .unwrap();
    let body: Envelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    assert!(!body.success);
    assert_eq!(body.error.as_deref(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_login_wrong_password_same_error() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, username) = create_staff_user(&pool, "handler").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    // Wrong password must be indistinguishable from an unknown user
    let response = client
        .post(
            "/api/auth/login",
            &json!({ "username": username, "password": "not-the-password" }),
        )
        .await
        .unwrap();
    let body: Envelope = assert_json(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();

    assert_eq!(body.error.as_deref(), Some("Invalid username or password"));
}

#[tokio::test]
async fn test_status_anonymous() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client.get("/api/auth/status").await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert!(!body.authenticated);
    assert!(body.user.is_none());
}

#[tokio::test]
async fn test_logout_ends_session() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, username) = create_staff_user(&pool, "elder").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&username, TEST_PASSWORD).await.unwrap();

    let response = client.post_empty("/api/auth/logout").await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = client.get("/api/auth/status").await.unwrap();
    let body: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.authenticated);
}

// ============================================================================
// User Management Tests
// ============================================================================

#[tokio::test]
async fn test_owner_creates_user() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let new_username = format!("itest_created_{}", unique_suffix());
    let response = client
        .post(
            "/api/users/create",
            &json!({
                "username": new_username,
                "password": "fresh-pass-123",
                "role": "handler"
            }),
        )
        .await
        .unwrap();
    let body: UserBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.user.username, new_username);
    assert_eq!(body.user.role, "handler");

    // The new account can log in immediately
    server.login(&new_username, "fresh-pass-123").await.unwrap();
}

#[tokio::test]
async fn test_handler_cannot_create_user() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, handler) = create_staff_user(&pool, "handler").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&handler, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/create",
            &json!({
                "username": format!("itest_denied_{}", unique_suffix()),
                "password": "fresh-pass-123",
                "role": "handler"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_create_user_duplicate_username() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let (_, existing) = create_staff_user(&pool, "handler").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/create",
            &json!({
                "username": existing,
                "password": "fresh-pass-123",
                "role": "handler"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_create_user_invalid_role() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/create",
            &json!({
                "username": format!("itest_badrole_{}", unique_suffix()),
                "password": "fresh-pass-123",
                "role": "archduke"
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_promote_changes_role() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let (target_id, _) = create_staff_user(&pool, "handler").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/promote",
            &json!({ "userID": target_id, "role": "moderator" }),
        )
        .await
        .unwrap();
    let body: UserBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body.user.user_id, target_id);
    assert_eq!(body.user.role, "moderator");
}

#[tokio::test]
async fn test_promote_unknown_user_not_found() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/promote",
            &json!({ "userID": 999_999_999_i64, "role": "elder" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_assign_main_to_handler() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let (handler_id, handler) = create_staff_user(&pool, "handler").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/assign-main",
            &json!({ "userID": handler_id, "mainID": main_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Repeating the same assignment is a no-op, not an error
    let response = client
        .post(
            "/api/users/assign-main",
            &json!({ "userID": handler_id, "mainID": main_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Assignment shows up in the handler's identity
    let handler_client = server.login(&handler, TEST_PASSWORD).await.unwrap();
    let response = handler_client.get("/api/auth/status").await.unwrap();
    let status: StatusBody = assert_json(response, StatusCode::OK).await.unwrap();
    let mains = status.user.unwrap().assigned_mains;
    assert!(mains.iter().any(|m| m.main_id == main_id));
}

#[tokio::test]
async fn test_assign_main_rejects_non_handler_target() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let (moderator_id, _) = create_staff_user(&pool, "moderator").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .post(
            "/api/users/assign-main",
            &json!({ "userID": moderator_id, "mainID": main_id }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_list_users_requires_management_role() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let (_, handler) = create_staff_user(&pool, "handler").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");

    let owner_client = server.login(&owner, TEST_PASSWORD).await.unwrap();
    let response = owner_client.get("/api/users/list").await.unwrap();
    let body: UsersBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
    assert!(!body.users.is_empty());

    let handler_client = server.login(&handler, TEST_PASSWORD).await.unwrap();
    let response = handler_client.get("/api/users/list").await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_mains_listing_is_public() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client.get("/api/users/mains").await.unwrap();
    let body: MainsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert!(body.mains.iter().any(|m| m.main_id == main_id));
}

// ============================================================================
// Public Attendance Intake Tests
// ============================================================================

#[tokio::test]
async fn test_public_attendance_submission() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let request = json!({ "mainID": main_id, "memberCode": "kestrel" });
    let response = client.post("/api/attendance/member", &request).await.unwrap();

    if is_within_submission_window(Utc::now()) {
        let body: SubmitBody = assert_json(response, StatusCode::OK).await.unwrap();
        assert!(body.success);
        assert!(body.attendance_id > 0);

        // Same IP, same main, same day: rejected as a duplicate
        let response = client.post("/api/attendance/member", &request).await.unwrap();
        assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
    } else {
        // Outside the submission window everything is rejected
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }
}

#[tokio::test]
async fn test_public_attendance_unknown_main() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client
        .post("/api/attendance/member", &json!({ "mainID": 999_999_999_i64 }))
        .await
        .unwrap();

    if is_within_submission_window(Utc::now()) {
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    } else {
        // The window gate runs before the main lookup
        assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
    }
}

#[tokio::test]
async fn test_public_attendance_missing_main_id() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    // Deserialization fails before any window or lookup logic
    let response = client
        .post("/api/attendance/member", &json!({ "memberCode": "kestrel" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Staff Attendance Tests
// ============================================================================

#[tokio::test]
async fn test_moderator_records_attendance() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, moderator) = create_staff_user(&pool, "moderator").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&moderator, TEST_PASSWORD).await.unwrap();

    let response = client
        .post("/api/attendance/records", &json!({ "mainID": main_id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = client
        .get(&format!("/api/attendance/records?mainID={main_id}"))
        .await
        .unwrap();
    let body: RecordsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.records.len(), 1);
}

#[tokio::test]
async fn test_handler_attendance_scoped_to_assignment() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (handler_id, handler) = create_staff_user(&pool, "handler").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&handler, TEST_PASSWORD).await.unwrap();

    // Unassigned handler cannot record against the main
    let response = client
        .post("/api/attendance/records", &json!({ "mainID": main_id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    assign_handler(&pool, handler_id, main_id).await.unwrap();

    let response = client
        .post("/api/attendance/records", &json!({ "mainID": main_id, "status": "late" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_delete_attendance_record() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, elder) = create_staff_user(&pool, "elder").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&elder, TEST_PASSWORD).await.unwrap();

    let response = client
        .post("/api/attendance/records", &json!({ "mainID": main_id }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = client
        .get(&format!("/api/attendance/records?mainID={main_id}"))
        .await
        .unwrap();
    let body: RecordsBody = assert_json(response, StatusCode::OK).await.unwrap();
    let attendance_id = body.records[0]["attendanceID"].as_i64().unwrap();

    let response = client
        .delete(&format!("/api/attendance/records/{attendance_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Deleting again reports the record as missing
    let response = client
        .delete(&format!("/api/attendance/records/{attendance_id}"))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_member_stats() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, moderator) = create_staff_user(&pool, "moderator").await.unwrap();
    create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&moderator, TEST_PASSWORD).await.unwrap();

    let response = client.get("/api/attendance/member-stats").await.unwrap();
    let body: StatsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);
}

// ============================================================================
// Shift Report Tests
// ============================================================================

#[tokio::test]
async fn test_submit_report_scores_deterministically() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (handler_id, handler) = create_staff_user(&pool, "handler").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();
    assign_handler(&pool, handler_id, main_id).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&handler, TEST_PASSWORD).await.unwrap();

    // A fixed past day on a fresh main: no public submissions, attendees 0.
    // Score: 0*100 + 2*50 + 1*500 + 3*50 + 1000 = 1750
    let response = client
        .post(
            "/api/logout/submit",
            &json!({
                "position": "gatekeeper",
                "dateTime": "2026-01-15T12:00:00Z",
                "droppedLinks": 2,
                "recruits": 1,
                "nicknamesSet": 3,
                "gameHandled": 1
            }),
        )
        .await
        .unwrap();
    let body: ReportBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.record.user_id, handler_id);
    assert_eq!(body.record.position, "gatekeeper");
    assert_eq!(body.record.attendees, 0);
    assert_eq!(body.record.total_score, 1750);
    assert!(body.record.logout_id > 0);
}

#[tokio::test]
async fn test_report_listing_visibility() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let (handler_a_id, handler_a) = create_staff_user(&pool, "handler").await.unwrap();
    let (handler_b_id, handler_b) = create_staff_user(&pool, "handler").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();
    assign_handler(&pool, handler_a_id, main_id).await.unwrap();
    assign_handler(&pool, handler_b_id, main_id).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");

    let report = |position: &str| {
        json!({
            "position": position,
            "dateTime": "2026-01-15T12:00:00Z",
            "droppedLinks": 0,
            "recruits": 0,
            "nicknamesSet": 0,
            "gameHandled": 0
        })
    };

    let client_a = server.login(&handler_a, TEST_PASSWORD).await.unwrap();
    let response = client_a.post("/api/logout/submit", &report("east")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let client_b = server.login(&handler_b, TEST_PASSWORD).await.unwrap();
    let response = client_b.post("/api/logout/submit", &report("west")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // Handlers only see their own reports
    let response = client_a.get("/api/logout/records").await.unwrap();
    let body: ReportsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.records.iter().all(|r| r.user_id == handler_a_id));

    // A handler's explicit userID filter is ignored, not honored
    let response = client_a
        .get(&format!("/api/logout/records?userID={handler_b_id}"))
        .await
        .unwrap();
    let body: ReportsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.records.iter().all(|r| r.user_id == handler_a_id));

    // The owner sees everyone, and can filter to one user
    let owner_client = server.login(&owner, TEST_PASSWORD).await.unwrap();
    let response = owner_client
        .get(&format!("/api/logout/records?userID={handler_b_id}"))
        .await
        .unwrap();
    let body: ReportsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.records.is_empty());
    assert!(body.records.iter().all(|r| r.user_id == handler_b_id));
}

#[tokio::test]
async fn test_attendance_breakdown_requires_date() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client.get("/api/logout/attendance-breakdown").await.unwrap();
    let body: Envelope = assert_json(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
    assert!(!body.success);
}

#[tokio::test]
async fn test_attendance_breakdown_includes_zero_count_mains() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&owner, TEST_PASSWORD).await.unwrap();

    let response = client
        .get("/api/logout/attendance-breakdown?date=2026-01-15")
        .await
        .unwrap();
    let body: BreakdownBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    let entry = body
        .breakdown
        .iter()
        .find(|e| e["mainID"].as_i64() == Some(main_id))
        .expect("fresh main missing from breakdown");
    assert_eq!(entry["attendanceCount"].as_i64(), Some(0));
}

#[tokio::test]
async fn test_report_stats() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (handler_id, handler) = create_staff_user(&pool, "handler").await.unwrap();
    let (owner_id, owner) = create_staff_user(&pool, "owner").await.unwrap();
    let main_id = create_main(&pool).await.unwrap();
    assign_handler(&pool, handler_id, main_id).await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");

    let client = server.login(&handler, TEST_PASSWORD).await.unwrap();
    let response = client
        .post(
            "/api/logout/submit",
            &json!({
                "position": "north",
                "dateTime": "2026-01-15T12:00:00Z",
                "recruits": 1,
                "gameHandled": 0
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let owner_client = server.login(&owner, TEST_PASSWORD).await.unwrap();
    let response = owner_client
        .post(
            "/api/logout/submit",
            &json!({
                "position": "south",
                "dateTime": "2026-01-16T12:00:00Z",
                "droppedLinks": 2,
                "gameHandled": 0
            }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = owner_client
        .get("/api/logout/stats?startDate=2026-01-01&endDate=2026-01-31")
        .await
        .unwrap();
    let body: ReportStatsBody = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    let entry = body
        .stats
        .iter()
        .find(|s| s["userID"].as_i64() == Some(handler_id))
        .expect("handler missing from stats");
    assert_eq!(entry["cumulativeScore"].as_i64(), Some(500));

    // Owner and elder can narrow the stats to a single user.
    let response = owner_client
        .get(&format!("/api/logout/stats?userID={handler_id}"))
        .await
        .unwrap();
    let body: ReportStatsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(!body.stats.is_empty());
    assert!(body
        .stats
        .iter()
        .all(|s| s["userID"].as_i64() == Some(handler_id)));

    // For everyone else the filter is ignored in favor of their own scope.
    let response = client
        .get(&format!("/api/logout/stats?userID={owner_id}"))
        .await
        .unwrap();
    let body: ReportStatsBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body
        .stats
        .iter()
        .all(|s| s["userID"].as_i64() == Some(handler_id)));
}

// ============================================================================
// Authorization Edge Tests
// ============================================================================

#[tokio::test]
async fn test_protected_routes_require_session() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.client().unwrap();

    let response = client.get("/api/users/list").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = client.get("/api/logout/records").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let response = client
        .post("/api/attendance/records", &json!({ "mainID": 1 }))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_handler_cannot_submit_for_unassigned_report() {
    if !check_test_env().await {
        return;
    }

    let pool = seed_pool().await.unwrap();
    let (_, handler) = create_staff_user(&pool, "handler").await.unwrap();

    let server = TestServer::start().await.expect("Failed to start server");
    let client = server.login(&handler, TEST_PASSWORD).await.unwrap();

    // A handler with no assigned main still submits; the report is scoped
    // to their (empty) assignment set, so attendees is zero.
    let response = client
        .post(
            "/api/logout/submit",
            &json!({
                "position": "floater",
                "dateTime": "2026-01-15T12:00:00Z",
                "gameHandled": 0
            }),
        )
        .await
        .unwrap();
    let body: ReportBody = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.record.attendees, 0);
    assert_eq!(body.record.total_score, 0);
}
