//! Shift report database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use guild_core::{ActivityCounts, ShiftReport, ShiftReportRow, UserReportStats};

/// Database model for the logout_records table
#[derive(Debug, Clone, FromRow)]
pub struct ShiftReportModel {
    pub logout_id: i64,
    pub user_id: i64,
    pub position: String,
    pub date_time: DateTime<Utc>,
    pub attendees: i64,
    pub dropped_links: i64,
    pub recruits: i64,
    pub nicknames_set: i64,
    pub game_handled: i64,
    pub total_score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShiftReportModel> for ShiftReport {
    fn from(model: ShiftReportModel) -> Self {
        Self {
            logout_id: model.logout_id,
            user_id: model.user_id,
            position: model.position,
            date_time: model.date_time,
            counts: ActivityCounts {
                attendees: model.attendees,
                dropped_links: model.dropped_links,
                recruits: model.recruits,
                nicknames_set: model.nicknames_set,
                game_handled: model.game_handled,
            },
            total_score: model.total_score,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Shift report joined with the submitter's username
#[derive(Debug, Clone, FromRow)]
pub struct ReportRowModel {
    pub logout_id: i64,
    pub user_id: i64,
    pub username: String,
    pub position: String,
    pub date_time: DateTime<Utc>,
    pub attendees: i64,
    pub dropped_links: i64,
    pub recruits: i64,
    pub nicknames_set: i64,
    pub game_handled: i64,
    pub total_score: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ReportRowModel> for ShiftReportRow {
    fn from(model: ReportRowModel) -> Self {
        Self {
            report: ShiftReport {
                logout_id: model.logout_id,
                user_id: model.user_id,
                position: model.position,
                date_time: model.date_time,
                counts: ActivityCounts {
                    attendees: model.attendees,
                    dropped_links: model.dropped_links,
                    recruits: model.recruits,
                    nicknames_set: model.nicknames_set,
                    game_handled: model.game_handled,
                },
                total_score: model.total_score,
                created_at: model.created_at,
                updated_at: model.updated_at,
            },
            username: model.username,
        }
    }
}

/// Aggregated per-user shift statistics row
#[derive(Debug, Clone, FromRow)]
pub struct ReportStatsModel {
    pub user_id: i64,
    pub username: String,
    pub total_entries: i64,
    pub total_attendees: i64,
    pub total_dropped_links: i64,
    pub total_recruits: i64,
    pub total_nicknames_set: i64,
    pub total_game_handled: i64,
    pub cumulative_score: i64,
    pub average_score: f64,
}

impl From<ReportStatsModel> for UserReportStats {
    fn from(model: ReportStatsModel) -> Self {
        Self {
            user_id: model.user_id,
            username: model.username,
            total_entries: model.total_entries,
            total_attendees: model.total_attendees,
            total_dropped_links: model.total_dropped_links,
            total_recruits: model.total_recruits,
            total_nicknames_set: model.total_nicknames_set,
            total_game_handled: model.total_game_handled,
            cumulative_score: model.cumulative_score,
            average_score: model.average_score,
        }
    }
}
