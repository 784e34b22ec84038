//! Test fixtures and data generators
//!
//! Seeds staff accounts and mains directly through the database so tests
//! can exercise the role-gated API without a bootstrap endpoint. Every
//! fixture gets a unique name so runs never collide on leftover data.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use guild_common::hash_password;
use guild_db::PgPool;
use serde::Deserialize;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Password shared by all seeded staff accounts
pub const TEST_PASSWORD: &str = "integration-pass-1";

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{}_{n}", std::process::id())
}

/// Connect a seeding pool from DATABASE_URL
pub async fn seed_pool() -> Result<PgPool> {
    Ok(guild_db::create_pool_from_env().await?)
}

/// Insert a staff account with the given role, returning (user_id, username)
pub async fn create_staff_user(pool: &PgPool, role: &str) -> Result<(i64, String)> {
    let username = format!("itest_{role}_{}", unique_suffix());
    let password_hash =
        hash_password(TEST_PASSWORD).map_err(|e| anyhow::anyhow!("hash failed: {e}"))?;

    let user_id: i64 = sqlx::query_scalar(
        r"
        INSERT INTO users (username, email, password_hash, role_id)
        VALUES ($1, NULL, $2, (SELECT role_id FROM roles WHERE name = $3))
        RETURNING user_id
        ",
    )
    .bind(&username)
    .bind(&password_hash)
    .bind(role)
    .fetch_one(pool)
    .await?;

    Ok((user_id, username))
}

/// Insert a main event, returning its id
pub async fn create_main(pool: &PgPool) -> Result<i64> {
    let name = format!("Test Main {}", unique_suffix());

    let main_id: i64 = sqlx::query_scalar(
        "INSERT INTO mains (name, description) VALUES ($1, 'integration fixture') RETURNING main_id",
    )
    .bind(&name)
    .fetch_one(pool)
    .await?;

    Ok(main_id)
}

/// Assign a handler to a main directly
pub async fn assign_handler(pool: &PgPool, user_id: i64, main_id: i64) -> Result<()> {
    sqlx::query(
        r"
        INSERT INTO handler_assignments (user_id, main_id)
        VALUES ($1, $2)
        ON CONFLICT DO NOTHING
        ",
    )
    .bind(user_id)
    .bind(main_id)
    .execute(pool)
    .await?;

    Ok(())
}

// ============================================================================
// Response bodies
// ============================================================================

/// Generic success/error envelope
#[derive(Debug, Deserialize)]
pub struct Envelope {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// Identity bundle returned by login and status
#[derive(Debug, Deserialize)]
pub struct IdentityBody {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    #[serde(rename = "roleName")]
    pub role_name: String,
    #[serde(rename = "assignedMains")]
    pub assigned_mains: Vec<MainBody>,
}

/// A main event
#[derive(Debug, Deserialize)]
pub struct MainBody {
    #[serde(rename = "mainID")]
    pub main_id: i64,
    pub name: String,
}

/// Login response
#[derive(Debug, Deserialize)]
pub struct LoginBody {
    pub success: bool,
    pub user: IdentityBody,
}

/// Session status response
#[derive(Debug, Deserialize)]
pub struct StatusBody {
    pub success: bool,
    pub authenticated: bool,
    pub user: Option<IdentityBody>,
}

/// Mains listing
#[derive(Debug, Deserialize)]
pub struct MainsBody {
    pub success: bool,
    pub mains: Vec<MainBody>,
}

/// Created user response
#[derive(Debug, Deserialize)]
pub struct UserBody {
    pub success: bool,
    pub user: UserSummary,
}

/// A staff user summary
#[derive(Debug, Deserialize)]
pub struct UserSummary {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    pub role: String,
}

/// Users listing
#[derive(Debug, Deserialize)]
pub struct UsersBody {
    pub success: bool,
    pub users: Vec<serde_json::Value>,
}

/// Attendance submission acknowledgement
#[derive(Debug, Deserialize)]
pub struct SubmitBody {
    pub success: bool,
    #[serde(rename = "attendanceID")]
    pub attendance_id: i64,
}

/// Staff attendance records listing
#[derive(Debug, Deserialize)]
pub struct RecordsBody {
    pub success: bool,
    pub records: Vec<serde_json::Value>,
}

/// Per-main public attendance counts
#[derive(Debug, Deserialize)]
pub struct StatsBody {
    pub success: bool,
    pub stats: Vec<serde_json::Value>,
}

/// Per-main breakdown for one day
#[derive(Debug, Deserialize)]
pub struct BreakdownBody {
    pub success: bool,
    #[serde(rename = "totalAttendees")]
    pub total_attendees: i64,
    pub breakdown: Vec<serde_json::Value>,
}

/// Submitted shift report acknowledgement
#[derive(Debug, Deserialize)]
pub struct ReportBody {
    pub success: bool,
    pub record: ReportRecord,
}

/// A shift report
#[derive(Debug, Deserialize)]
pub struct ReportRecord {
    #[serde(rename = "logoutID")]
    pub logout_id: i64,
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub username: String,
    pub position: String,
    pub attendees: i64,
    #[serde(rename = "totalScore")]
    pub total_score: i64,
}

/// Shift report listing
#[derive(Debug, Deserialize)]
pub struct ReportsBody {
    pub success: bool,
    pub records: Vec<ReportRecord>,
}

/// Aggregate report statistics
#[derive(Debug, Deserialize)]
pub struct ReportStatsBody {
    pub success: bool,
    pub stats: Vec<serde_json::Value>,
}
