//! PostgreSQL implementation of AttendanceRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::{
    AttendanceQuery, AttendanceRecord, AttendanceRecordRow, AttendanceRepository, AttendanceStatus,
    RepoResult,
};

use crate::models::{AttendanceRecordModel, AttendanceRowModel};

use super::error::{attendance_not_found, map_db_error};

/// PostgreSQL implementation of AttendanceRepository
#[derive(Clone)]
pub struct PgAttendanceRepository {
    pool: PgPool,
}

impl PgAttendanceRepository {
    /// Create a new PgAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AttendanceRepository for PgAttendanceRepository {
    #[instrument(skip(self))]
    async fn create(
        &self,
        created_by_user_id: i64,
        main_id: i64,
        status: AttendanceStatus,
    ) -> RepoResult<AttendanceRecord> {
        let model = sqlx::query_as::<_, AttendanceRecordModel>(
            r"
            INSERT INTO attendance_records (created_by_user_id, main_id, status)
            VALUES ($1, $2, $3)
            RETURNING attendance_id, created_by_user_id, main_id, date_and_time, status
            ",
        )
        .bind(created_by_user_id)
        .bind(main_id)
        .bind(status.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        AttendanceRecord::try_from(model)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, attendance_id: i64) -> RepoResult<Option<AttendanceRecord>> {
        let result = sqlx::query_as::<_, AttendanceRecordModel>(
            r"
            SELECT attendance_id, created_by_user_id, main_id, date_and_time, status
            FROM attendance_records
            WHERE attendance_id = $1
            ",
        )
        .bind(attendance_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(AttendanceRecord::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn delete(&self, attendance_id: i64) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            DELETE FROM attendance_records WHERE attendance_id = $1
            ",
        )
        .bind(attendance_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(attendance_not_found(attendance_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, query: &AttendanceQuery) -> RepoResult<Vec<AttendanceRecordRow>> {
        let rows = sqlx::query_as::<_, AttendanceRowModel>(
            r"
            SELECT a.attendance_id, a.date_and_time, a.status,
                   u.username AS created_by, m.main_id, m.name AS main_name
            FROM attendance_records a
            JOIN users u ON u.user_id = a.created_by_user_id
            JOIN mains m ON m.main_id = a.main_id
            WHERE ($1::BIGINT IS NULL OR a.main_id IN (
                      SELECT main_id FROM handler_assignments WHERE user_id = $1
                  ))
              AND ($2::BIGINT IS NULL OR a.main_id = $2)
              AND ($3::DATE IS NULL OR a.date_and_time::DATE = $3)
            ORDER BY a.date_and_time DESC
            ",
        )
        .bind(query.scope_user_id)
        .bind(query.main_id)
        .bind(query.day)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(AttendanceRecordRow::try_from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgAttendanceRepository>();
    }
}
