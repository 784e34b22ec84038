//! Service context - dependency container for services
//!
//! Holds all repositories, the session store, and other dependencies
//! needed by services.

use std::sync::Arc;

use guild_cache::{SessionStore, SharedRedisPool};
use guild_core::{
    AssignmentRepository, AttendanceRepository, MainRepository, MemberAttendanceRepository,
    ReportRepository, UserRepository,
};
use guild_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The Redis-backed session store
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    main_repo: Arc<dyn MainRepository>,
    assignment_repo: Arc<dyn AssignmentRepository>,
    attendance_repo: Arc<dyn AttendanceRepository>,
    member_attendance_repo: Arc<dyn MemberAttendanceRepository>,
    report_repo: Arc<dyn ReportRepository>,

    // Cache stores
    session_store: SessionStore,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        user_repo: Arc<dyn UserRepository>,
        main_repo: Arc<dyn MainRepository>,
        assignment_repo: Arc<dyn AssignmentRepository>,
        attendance_repo: Arc<dyn AttendanceRepository>,
        member_attendance_repo: Arc<dyn MemberAttendanceRepository>,
        report_repo: Arc<dyn ReportRepository>,
        session_store: SessionStore,
    ) -> Self {
        Self {
            pool,
            redis_pool,
            user_repo,
            main_repo,
            assignment_repo,
            attendance_repo,
            member_attendance_repo,
            report_repo,
            session_store,
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the main event repository
    pub fn main_repo(&self) -> &dyn MainRepository {
        self.main_repo.as_ref()
    }

    /// Get the handler assignment repository
    pub fn assignment_repo(&self) -> &dyn AssignmentRepository {
        self.assignment_repo.as_ref()
    }

    /// Get the staff attendance repository
    pub fn attendance_repo(&self) -> &dyn AttendanceRepository {
        self.attendance_repo.as_ref()
    }

    /// Get the public member attendance repository
    pub fn member_attendance_repo(&self) -> &dyn MemberAttendanceRepository {
        self.member_attendance_repo.as_ref()
    }

    /// Get the shift report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    // === Cache Stores ===

    /// Get the session store
    pub fn session_store(&self) -> &SessionStore {
        &self.session_store
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .field("session_store", &"SessionStore")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    main_repo: Option<Arc<dyn MainRepository>>,
    assignment_repo: Option<Arc<dyn AssignmentRepository>>,
    attendance_repo: Option<Arc<dyn AttendanceRepository>>,
    member_attendance_repo: Option<Arc<dyn MemberAttendanceRepository>>,
    report_repo: Option<Arc<dyn ReportRepository>>,
    session_store: Option<SessionStore>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            redis_pool: None,
            user_repo: None,
            main_repo: None,
            assignment_repo: None,
            attendance_repo: None,
            member_attendance_repo: None,
            report_repo: None,
            session_store: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn main_repo(mut self, repo: Arc<dyn MainRepository>) -> Self {
        self.main_repo = Some(repo);
        self
    }

    pub fn assignment_repo(mut self, repo: Arc<dyn AssignmentRepository>) -> Self {
        self.assignment_repo = Some(repo);
        self
    }

    pub fn attendance_repo(mut self, repo: Arc<dyn AttendanceRepository>) -> Self {
        self.attendance_repo = Some(repo);
        self
    }

    pub fn member_attendance_repo(mut self, repo: Arc<dyn MemberAttendanceRepository>) -> Self {
        self.member_attendance_repo = Some(repo);
        self
    }

    pub fn report_repo(mut self, repo: Arc<dyn ReportRepository>) -> Self {
        self.report_repo = Some(repo);
        self
    }

    pub fn session_store(mut self, store: SessionStore) -> Self {
        self.session_store = Some(store);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.main_repo
                .ok_or_else(|| ServiceError::validation("main_repo is required"))?,
            self.assignment_repo
                .ok_or_else(|| ServiceError::validation("assignment_repo is required"))?,
            self.attendance_repo
                .ok_or_else(|| ServiceError::validation("attendance_repo is required"))?,
            self.member_attendance_repo
                .ok_or_else(|| ServiceError::validation("member_attendance_repo is required"))?,
            self.report_repo
                .ok_or_else(|| ServiceError::validation("report_repo is required"))?,
            self.session_store
                .ok_or_else(|| ServiceError::validation("session_store is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
