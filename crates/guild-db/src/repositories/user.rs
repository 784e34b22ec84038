//! PostgreSQL implementation of UserRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guild_core::{
    MainEvent, NewUser, RepoResult, Role, User, UserRepository, UserWithAssignments,
};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, user_id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.user_id, u.username, u.email, r.name AS role
            FROM users u
            JOIN roles r ON r.role_id = u.role_id
            WHERE u.user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.user_id, u.username, u.email, r.name AS role
            FROM users u
            JOIN roles r ON r.role_id = u.role_id
            WHERE u.username = $1
            ",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, user_id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &NewUser, password_hash: &str) -> RepoResult<User> {
        let user_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (username, email, password_hash, role_id)
            VALUES ($1, $2, $3, (SELECT role_id FROM roles WHERE name = $4))
            RETURNING user_id
            ",
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(password_hash)
        .bind(user.role.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || guild_core::DomainError::UsernameAlreadyExists))?;

        Ok(User {
            user_id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        })
    }

    #[instrument(skip(self))]
    async fn update_role(&self, user_id: i64, role: Role) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET role_id = (SELECT role_id FROM roles WHERE name = $2)
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .bind(role.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_with_assignments(&self) -> RepoResult<Vec<UserWithAssignments>> {
        let users = sqlx::query_as::<_, UserModel>(
            r"
            SELECT u.user_id, u.username, u.email, r.name AS role
            FROM users u
            JOIN roles r ON r.role_id = u.role_id
            ORDER BY u.username
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let assignments = sqlx::query_as::<_, (i64, i64, String, Option<String>)>(
            r"
            SELECT ha.user_id, m.main_id, m.name, m.description
            FROM handler_assignments ha
            JOIN mains m ON m.main_id = ha.main_id
            ORDER BY m.name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut by_user: HashMap<i64, Vec<MainEvent>> = HashMap::new();
        for (user_id, main_id, name, description) in assignments {
            by_user.entry(user_id).or_default().push(MainEvent {
                main_id,
                name,
                description,
            });
        }

        users
            .into_iter()
            .map(|model| {
                let assigned_mains = by_user.remove(&model.user_id).unwrap_or_default();
                Ok(UserWithAssignments {
                    user: User::try_from(model)?,
                    assigned_mains,
                })
            })
            .collect()
    }
}
