//! Authentication service
//!
//! Handles staff login, session resolution, and logout.

use guild_cache::SessionIdentity;
use guild_common::{AppError, PasswordService};
use tracing::{info, instrument, warn};

use crate::dto::{IdentityView, LoginRequest, LoginResponse};

use super::access::AuthenticatedUser;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with username and password, returning the session token and
    /// the logged-in user.
    ///
    /// An unknown username and a wrong password both produce the same
    /// credential error.
    #[instrument(skip(self, request), fields(username = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<(String, LoginResponse)> {
        let user = self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown username");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.user_id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        PasswordService::new()
            .verify_or_error(&request.password, &password_hash)
            .map_err(|e| {
                warn!(user_id = user.user_id, "Login failed: invalid password");
                ServiceError::App(e)
            })?;

        let identity = SessionIdentity::new(user.user_id, user.username.clone(), user.role);
        let token = self
            .ctx
            .session_store()
            .create(&identity)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let assigned_mains = self.ctx.assignment_repo().mains_for_user(user.user_id).await?;

        info!(user_id = user.user_id, "User logged in");

        Ok((token, LoginResponse::new(&user, &assigned_mains)))
    }

    /// Resolve a session token to the authenticated caller.
    ///
    /// The role comes from the session; the user row is re-read so a
    /// deleted account or changed role invalidates stale sessions.
    #[instrument(skip(self, token))]
    pub async fn authenticate(&self, token: &str) -> ServiceResult<AuthenticatedUser> {
        let identity = self
            .ctx
            .session_store()
            .get(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(AppError::MissingAuth))?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(identity.user_id)
            .await?
            .ok_or(ServiceError::App(AppError::MissingAuth))?;

        Ok(AuthenticatedUser::new(
            user.user_id,
            user.username,
            user.role,
        ))
    }

    /// Logout by destroying the session
    #[instrument(skip(self, token))]
    pub async fn logout(&self, token: &str) -> ServiceResult<()> {
        self.ctx
            .session_store()
            .destroy(token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!("User logged out");
        Ok(())
    }

    /// Build the caller's identity bundle, including current assignments
    #[instrument(skip(self))]
    pub async fn identity(&self, caller: &AuthenticatedUser) -> ServiceResult<IdentityView> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(caller.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", caller.user_id.to_string()))?;

        let assigned_mains = self.ctx.assignment_repo().mains_for_user(user.user_id).await?;

        Ok(IdentityView::new(&user, &assigned_mains))
    }
}
