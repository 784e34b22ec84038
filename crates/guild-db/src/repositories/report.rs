//! PostgreSQL implementation of ReportRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::{
    NewShiftReport, RepoResult, ReportQuery, ReportRepository, ReportStatsQuery, ShiftReport,
    ShiftReportRow, UserReportStats,
};

use crate::models::{ReportRowModel, ReportStatsModel, ShiftReportModel};

use super::error::map_db_error;

/// PostgreSQL implementation of ReportRepository
#[derive(Clone)]
pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    /// Create a new PgReportRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    #[instrument(skip(self, report))]
    async fn create(&self, report: &NewShiftReport) -> RepoResult<ShiftReport> {
        let model = sqlx::query_as::<_, ShiftReportModel>(
            r"
            INSERT INTO logout_records
                (user_id, position, date_time, attendees, dropped_links,
                 recruits, nicknames_set, game_handled, total_score)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING logout_id, user_id, position, date_time, attendees, dropped_links,
                      recruits, nicknames_set, game_handled, total_score,
                      created_at, updated_at
            ",
        )
        .bind(report.user_id)
        .bind(&report.position)
        .bind(report.date_time)
        .bind(report.counts.attendees)
        .bind(report.counts.dropped_links)
        .bind(report.counts.recruits)
        .bind(report.counts.nicknames_set)
        .bind(report.counts.game_handled)
        .bind(report.total_score)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &ReportQuery) -> RepoResult<Vec<ShiftReportRow>> {
        let rows = sqlx::query_as::<_, ReportRowModel>(
            r"
            SELECT l.logout_id, l.user_id, u.username, l.position, l.date_time,
                   l.attendees, l.dropped_links, l.recruits, l.nicknames_set,
                   l.game_handled, l.total_score, l.created_at, l.updated_at
            FROM logout_records l
            JOIN users u ON u.user_id = l.user_id
            WHERE ($1::BIGINT IS NULL OR l.user_id = $1)
              AND ($2::DATE IS NULL OR l.date_time::DATE = $2)
            ORDER BY l.date_time DESC
            ",
        )
        .bind(query.user_id)
        .bind(query.day)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(ShiftReportRow::from).collect())
    }

    #[instrument(skip(self))]
    async fn stats(&self, query: &ReportStatsQuery) -> RepoResult<Vec<UserReportStats>> {
        let rows = sqlx::query_as::<_, ReportStatsModel>(
            r"
            SELECT u.user_id, u.username,
                   COUNT(*) AS total_entries,
                   COALESCE(SUM(l.attendees), 0)::BIGINT AS total_attendees,
                   COALESCE(SUM(l.dropped_links), 0)::BIGINT AS total_dropped_links,
                   COALESCE(SUM(l.recruits), 0)::BIGINT AS total_recruits,
                   COALESCE(SUM(l.nicknames_set), 0)::BIGINT AS total_nicknames_set,
                   COALESCE(SUM(l.game_handled), 0)::BIGINT AS total_game_handled,
                   COALESCE(SUM(l.total_score), 0)::BIGINT AS cumulative_score,
                   COALESCE(AVG(l.total_score), 0)::FLOAT8 AS average_score
            FROM logout_records l
            JOIN users u ON u.user_id = l.user_id
            WHERE ($1::BIGINT IS NULL OR l.user_id = $1)
              AND ($2::DATE IS NULL OR l.date_time::DATE >= $2)
              AND ($3::DATE IS NULL OR l.date_time::DATE <= $3)
            GROUP BY u.user_id, u.username
            ORDER BY cumulative_score DESC
            ",
        )
        .bind(query.user_id)
        .bind(query.start_day)
        .bind(query.end_day)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(UserReportStats::from).collect())
    }
}
