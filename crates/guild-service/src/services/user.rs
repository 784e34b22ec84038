//! User management service
//!
//! Account creation, role changes, and handler assignment. All operations
//! require the MANAGE_USERS capability.

use guild_common::auth::hash_password;
use guild_core::{Capabilities, DomainError, NewUser, Role};
use tracing::{info, instrument};

use crate::dto::{
    AssignHandlerRequest, CreateUserRequest, PromoteRequest, UserResponse, UsersResponse,
};

use super::access::{AccessPolicy, AuthenticatedUser};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User management service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a staff account
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn create_user(
        &self,
        caller: &AuthenticatedUser,
        request: CreateUserRequest,
    ) -> ServiceResult<UserResponse> {
        AccessPolicy::require(caller, Capabilities::MANAGE_USERS)?;

        let role: Role = request
            .role
            .parse()
            .map_err(|e: guild_core::RoleParseError| DomainError::InvalidRole(e.0))?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let new_user = NewUser {
            username: request.username,
            email: request.email,
            role,
        };

        let user = self.ctx.user_repo().create(&new_user, &password_hash).await?;

        info!(user_id = user.user_id, role = %user.role, "User created");

        Ok(UserResponse::new(&user))
    }

    /// Change a user's role
    #[instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn promote(
        &self,
        caller: &AuthenticatedUser,
        request: PromoteRequest,
    ) -> ServiceResult<UserResponse> {
        AccessPolicy::require(caller, Capabilities::MANAGE_USERS)?;

        let role: Role = request
            .role
            .parse()
            .map_err(|e: guild_core::RoleParseError| DomainError::InvalidRole(e.0))?;

        self.ctx.user_repo().update_role(request.user_id, role).await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(request.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(request.user_id))?;

        info!(user_id = request.user_id, role = %role, "Role updated");

        Ok(UserResponse::new(&user))
    }

    /// Assign a handler to a main event.
    ///
    /// Only users with the handler role can be assigned; the target main
    /// must exist. Assigning twice is a no-op.
    #[instrument(skip(self))]
    pub async fn assign_handler(
        &self,
        caller: &AuthenticatedUser,
        request: AssignHandlerRequest,
    ) -> ServiceResult<()> {
        AccessPolicy::require(caller, Capabilities::MANAGE_USERS)?;

        let target = self
            .ctx
            .user_repo()
            .find_by_id(request.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(request.user_id))?;

        if target.role != Role::Handler {
            return Err(ServiceError::Domain(DomainError::NotAHandler(
                target.user_id,
            )));
        }

        self.ctx
            .main_repo()
            .find_by_id(request.main_id)
            .await?
            .ok_or(DomainError::MainNotFound(request.main_id))?;

        self.ctx
            .assignment_repo()
            .assign(request.user_id, request.main_id)
            .await?;

        info!(
            user_id = request.user_id,
            main_id = request.main_id,
            "Handler assigned to main"
        );

        Ok(())
    }

    /// List all users with their roles and assigned mains
    #[instrument(skip(self))]
    pub async fn list_users(&self, caller: &AuthenticatedUser) -> ServiceResult<UsersResponse> {
        AccessPolicy::require(caller, Capabilities::MANAGE_USERS)?;

        let users = self.ctx.user_repo().list_with_assignments().await?;
        Ok(UsersResponse::new(&users))
    }
}
