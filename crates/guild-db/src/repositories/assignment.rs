//! PostgreSQL implementation of AssignmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::{AssignmentRepository, MainEvent, RepoResult};

use crate::models::MainModel;

use super::error::map_db_error;

/// PostgreSQL implementation of AssignmentRepository
#[derive(Clone)]
pub struct PgAssignmentRepository {
    pool: PgPool,
}

impl PgAssignmentRepository {
    /// Create a new PgAssignmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for PgAssignmentRepository {
    #[instrument(skip(self))]
    async fn assign(&self, user_id: i64, main_id: i64) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO handler_assignments (user_id, main_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, main_id) DO NOTHING
            ",
        )
        .bind(user_id)
        .bind(main_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_assigned(&self, user_id: i64, main_id: i64) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM handler_assignments
                WHERE user_id = $1 AND main_id = $2
            )
            ",
        )
        .bind(user_id)
        .bind(main_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self))]
    async fn mains_for_user(&self, user_id: i64) -> RepoResult<Vec<MainEvent>> {
        let result = sqlx::query_as::<_, MainModel>(
            r"
            SELECT m.main_id, m.name, m.description
            FROM handler_assignments ha
            JOIN mains m ON m.main_id = ha.main_id
            WHERE ha.user_id = $1
            ORDER BY m.name
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(MainEvent::from).collect())
    }
}
