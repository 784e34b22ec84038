//! PostgreSQL implementation of MemberAttendanceRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::{
    DomainError, MainAttendanceCount, MemberAttendance, MemberAttendanceRepository, RepoResult,
};

use crate::models::MemberAttendanceModel;

use super::error::{map_db_error, map_unique_violation};

/// PostgreSQL implementation of MemberAttendanceRepository
#[derive(Clone)]
pub struct PgMemberAttendanceRepository {
    pool: PgPool,
}

impl PgMemberAttendanceRepository {
    /// Create a new PgMemberAttendanceRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MemberAttendanceRepository for PgMemberAttendanceRepository {
    #[instrument(skip(self))]
    async fn insert(
        &self,
        main_id: i64,
        ip_address: &str,
        member_code: Option<&str>,
    ) -> RepoResult<MemberAttendance> {
        // The unique index on (main_id, ip_address, submitted_on) rejects a
        // second submission for the same day at the storage level.
        let model = sqlx::query_as::<_, MemberAttendanceModel>(
            r"
            INSERT INTO member_attendances (main_id, ip_address, member_code)
            VALUES ($1, $2, $3)
            RETURNING id, main_id, submitted_at, ip_address, member_code
            ",
        )
        .bind(main_id)
        .bind(ip_address)
        .bind(member_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::DuplicateSubmission))?;

        Ok(model.into())
    }

    #[instrument(skip(self))]
    async fn count_for_day(&self, day: NaiveDate, scope_user_id: Option<i64>) -> RepoResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r"
            SELECT COUNT(*)
            FROM member_attendances ma
            WHERE ma.submitted_on = $1
              AND ($2::BIGINT IS NULL OR ma.main_id IN (
                      SELECT main_id FROM handler_assignments WHERE user_id = $2
                  ))
            ",
        )
        .bind(day)
        .bind(scope_user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(count)
    }

    #[instrument(skip(self))]
    async fn stats(
        &self,
        day: Option<NaiveDate>,
        scope_user_id: Option<i64>,
    ) -> RepoResult<Vec<MainAttendanceCount>> {
        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            r"
            SELECT m.main_id, m.name, COUNT(ma.id)
            FROM member_attendances ma
            JOIN mains m ON m.main_id = ma.main_id
            WHERE ($1::DATE IS NULL OR ma.submitted_on = $1)
              AND ($2::BIGINT IS NULL OR ma.main_id IN (
                      SELECT main_id FROM handler_assignments WHERE user_id = $2
                  ))
            GROUP BY m.main_id, m.name
            ORDER BY COUNT(ma.id) DESC, m.name
            ",
        )
        .bind(day)
        .bind(scope_user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(main_id, main_name, attendance_count)| MainAttendanceCount {
                main_id,
                main_name,
                attendance_count,
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn breakdown_for_day(
        &self,
        day: NaiveDate,
        scope_user_id: Option<i64>,
    ) -> RepoResult<Vec<MainAttendanceCount>> {
        // Left join so mains without submissions still report a zero count.
        let rows = sqlx::query_as::<_, (i64, String, i64)>(
            r"
            SELECT m.main_id, m.name, COUNT(ma.id)
            FROM mains m
            LEFT JOIN member_attendances ma
                   ON ma.main_id = m.main_id AND ma.submitted_on = $1
            WHERE ($2::BIGINT IS NULL OR m.main_id IN (
                      SELECT main_id FROM handler_assignments WHERE user_id = $2
                  ))
            GROUP BY m.main_id, m.name
            ORDER BY m.name
            ",
        )
        .bind(day)
        .bind(scope_user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows
            .into_iter()
            .map(|(main_id, main_name, attendance_count)| MainAttendanceCount {
                main_id,
                main_name,
                attendance_count,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgMemberAttendanceRepository>();
    }
}
