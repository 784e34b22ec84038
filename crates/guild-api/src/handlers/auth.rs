//! Authentication handlers
//!
//! Login, logout, and session status. Login sets the HTTP-only session
//! cookie; logout destroys the session and clears the cookie.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use guild_common::SessionConfig;
use guild_service::dto::{LoginRequest, LoginResponse, MessageResponse, StatusResponse};
use guild_service::AuthService;

use crate::extractors::{OptionalCurrentUser, SessionToken, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

fn session_cookie(config: &SessionConfig, token: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.cookie_secure)
        .same_site(SameSite::Lax)
        .build()
}

fn removal_cookie(config: &SessionConfig) -> Cookie<'static> {
    let mut cookie = Cookie::from(config.cookie_name.clone());
    cookie.set_path("/");
    cookie
}

/// Login with username and password
///
/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let service = AuthService::new(state.service_context());
    let (token, response) = service.login(request).await?;

    let jar = jar.add(session_cookie(state.session_config(), token));
    Ok((jar, Json(response)))
}

/// Logout and destroy the session
///
/// POST /api/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    SessionToken(token): SessionToken,
) -> ApiResult<(CookieJar, Json<MessageResponse>)> {
    let service = AuthService::new(state.service_context());
    service.logout(&token).await?;

    let jar = jar.remove(removal_cookie(state.session_config()));
    Ok((jar, Json(MessageResponse::new("Logged out"))))
}

/// Session status; anonymous callers get `authenticated: false`
///
/// GET /api/auth/status
pub async fn status(
    State(state): State<AppState>,
    OptionalCurrentUser(user): OptionalCurrentUser,
) -> ApiResult<Json<StatusResponse>> {
    let Some(user) = user else {
        return Ok(Json(StatusResponse::anonymous()));
    };

    let service = AuthService::new(state.service_context());
    let identity = service.identity(&user).await?;
    Ok(Json(StatusResponse::authenticated(identity)))
}
