//! Access policy - capability checks against the caller's identity
//!
//! Authorization is decided per request from the caller's current role and,
//! for handlers, their current assignments. Nothing here is cached between
//! requests, so a role change or reassignment takes effect immediately.

use guild_core::{Capabilities, DomainError, Role};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// The authenticated caller, as resolved from the session token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
}

impl AuthenticatedUser {
    #[must_use]
    pub fn new(user_id: i64, username: String, role: Role) -> Self {
        Self {
            user_id,
            username,
            role,
        }
    }
}

/// Capability checks for an authenticated caller
pub struct AccessPolicy<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccessPolicy<'a> {
    /// Create a new AccessPolicy
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Require a single capability, naming it in the error on failure
    pub fn require(user: &AuthenticatedUser, capability: Capabilities) -> ServiceResult<()> {
        if user.role.can(capability) {
            Ok(())
        } else {
            Err(ServiceError::permission_denied(format!("{capability:?}")))
        }
    }

    /// Require a capability against a specific main.
    ///
    /// Handlers additionally need a current assignment to that main; this is
    /// checked against the database on every call.
    pub async fn require_for_main(
        &self,
        user: &AuthenticatedUser,
        capability: Capabilities,
        main_id: i64,
    ) -> ServiceResult<()> {
        Self::require(user, capability)?;

        if user.role.requires_assignment()
            && !self
                .ctx
                .assignment_repo()
                .is_assigned(user.user_id, main_id)
                .await?
        {
            return Err(ServiceError::Domain(DomainError::NotAssignedToMain(
                main_id,
            )));
        }

        Ok(())
    }

    /// Visibility scope for attendance queries.
    ///
    /// Returns `Some(user_id)` when results must be restricted to the
    /// caller's assigned mains.
    #[must_use]
    pub fn attendance_scope(user: &AuthenticatedUser) -> Option<i64> {
        if user.role.requires_assignment() {
            Some(user.user_id)
        } else {
            None
        }
    }

    /// Visibility scope for shift reports.
    ///
    /// Owners and elders see everyone's reports; everyone else sees only
    /// their own.
    #[must_use]
    pub fn report_scope(user: &AuthenticatedUser) -> Option<i64> {
        if user.role.can(Capabilities::VIEW_ALL_REPORTS) {
            None
        } else {
            Some(user.user_id)
        }
    }
}
