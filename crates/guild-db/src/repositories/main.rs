//! PostgreSQL implementation of MainRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::{MainEvent, MainRepository, RepoResult};

use crate::models::MainModel;

use super::error::map_db_error;

/// PostgreSQL implementation of MainRepository
#[derive(Clone)]
pub struct PgMainRepository {
    pool: PgPool,
}

impl PgMainRepository {
    /// Create a new PgMainRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MainRepository for PgMainRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, main_id: i64) -> RepoResult<Option<MainEvent>> {
        let result = sqlx::query_as::<_, MainModel>(
            r"
            SELECT main_id, name, description
            FROM mains
            WHERE main_id = $1
            ",
        )
        .bind(main_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(MainEvent::from))
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepoResult<Vec<MainEvent>> {
        let result = sqlx::query_as::<_, MainModel>(
            r"
            SELECT main_id, name, description
            FROM mains
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(MainEvent::from).collect())
    }
}
