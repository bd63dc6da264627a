use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use serenity::all::UserId;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, user::UserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        model::user::user_dto,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
///
/// # Fields
/// - `state` - CSRF protection token that must match the value stored in the session
/// - `code` - Authorization code used to exchange for access tokens
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

/// Redirects to Discord's OAuth2 authorization page.
#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    let (url, csrf_token) = auth_service.login_url();

    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_str()))
}

/// Completes the OAuth2 login and stores the user in the session.
///
/// # Returns
/// - `200 OK` - The logged-in user
/// - `400 Bad Request` - CSRF state mismatch
/// - `500 Internal Server Error` - Token exchange or user lookup failed
#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state"),
        ("code" = String, Query, description = "Authorization code")
    ),
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "CSRF state mismatch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = AuthService::new(&state.http_client, &state.oauth_client);

    validate_csrf(&session, &params.state).await?;

    let user = auth_service.callback(params.code).await?;
    AuthSession::new(&session).set_user_id(user.id.get()).await?;

    Ok((StatusCode::OK, Json(user_dto(&user))))
}

/// Clears the session.
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Logged out")
    ),
)]
pub async fn logout(session: Session) -> impl IntoResponse {
    AuthSession::new(&session).clear().await;

    StatusCode::NO_CONTENT
}

/// Returns the logged-in user as Discord currently knows them.
///
/// # Access Control
/// - Logged in
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Discord lookup failed
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user_id = AuthGuard::new(&state.discord_http, &session)
        .require_user()
        .await?;

    let user = state
        .discord_http
        .get_user(UserId::new(user_id))
        .await?;

    Ok((StatusCode::OK, Json(user_dto(&user))))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if stored_state.as_deref() == Some(csrf_state) {
        return Ok(());
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
