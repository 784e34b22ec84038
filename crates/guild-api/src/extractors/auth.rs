//! Session authentication extractors
//!
//! Resolves the session cookie to the authenticated caller. The session
//! token maps to an identity in Redis; the user row is re-read on every
//! request, so role changes and deleted accounts take effect immediately.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use guild_service::{AuthService, AuthenticatedUser};

use crate::response::ApiError;
use crate::state::AppState;

/// The raw session token from the session cookie
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::MissingAuth)?;

        let app_state = AppState::from_ref(state);
        let cookie_name = &app_state.session_config().cookie_name;

        let token = jar
            .get(cookie_name)
            .map(|cookie| cookie.value().to_string())
            .ok_or(ApiError::MissingAuth)?;

        Ok(SessionToken(token))
    }
}

/// The authenticated caller, resolved from the session cookie
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthenticatedUser);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let SessionToken(token) = SessionToken::from_request_parts(parts, state).await?;

        let app_state = AppState::from_ref(state);
        let user = AuthService::new(app_state.service_context())
            .authenticate(&token)
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Session authentication failed");
                ApiError::Service(e)
            })?;

        Ok(CurrentUser(user))
    }
}

/// Optional authenticated caller
///
/// Resolves to `None` for anonymous requests and for stale or invalid
/// sessions instead of rejecting the request.
#[derive(Debug, Clone)]
pub struct OptionalCurrentUser(pub Option<AuthenticatedUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalCurrentUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match CurrentUser::from_request_parts(parts, state).await {
            Ok(CurrentUser(user)) => Ok(OptionalCurrentUser(Some(user))),
            Err(_) => Ok(OptionalCurrentUser(None)),
        }
    }
}
