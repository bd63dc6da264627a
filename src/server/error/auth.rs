use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No Discord user id is stored in the session.
    #[error("User not found in session")]
    UserNotInSession,

    /// The user is logged in but lacks the permission the endpoint requires.
    ///
    /// # Fields
    /// - Discord id of the user
    /// - Description of what was denied, logged server-side only
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(u64, String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF state token in the OAuth callback URL does not match the token stored
    /// in the session, indicating a potential CSRF attack or an invalid callback request.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the authorization code for a token failed.
    #[error("Failed to exchange OAuth2 authorization code: {0}")]
    TokenExchange(String),
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `CsrfValidationFailed` → 400 Bad Request
/// - `TokenExchange` → 500 Internal Server Error
///
/// Client-facing messages stay generic; the details are logged at debug level.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "You are not logged in"),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You do not have permission to access this resource",
            ),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchange(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an issue logging you in, please try again.",
            ),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
