//! Error types and HTTP response handling.
//!
//! `AppError` is the top-level error returned by services. It wraps the domain errors and
//! the third-party errors services propagate, implements `IntoResponse` for the REST API, and
//! provides `user_message()` for the ephemeral replies the bot sends back to Discord users.

pub mod auth;
pub mod config;
pub mod internal;
pub mod moderation;
pub mod ticket;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError,
        moderation::ModerationError, ticket::TicketError,
    },
};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion. Domain errors map their own status
/// codes, third-party failures become 500 Internal Server Error.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Mute, ban or prune rule violation.
    #[error(transparent)]
    ModerationErr(#[from] ModerationError),

    /// Ticket lifecycle violation.
    #[error(transparent)]
    TicketErr(#[from] TicketError),

    /// Unexpected internal state such as unparsable stored ids.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Local I/O failure, e.g. binding the API listener.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error. Results in 404 Not Found.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error. Results in 400 Bad Request.
    #[error("{0}")]
    BadRequest(String),

    /// The request conflicts with existing state, e.g. a duplicate tag name.
    /// Results in 409 Conflict.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// The message is logged but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Boxes serenity errors to keep `AppError` small.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

impl AppError {
    /// Maps a unique-index violation to `Conflict(message)`. Other database errors pass
    /// through unchanged.
    pub fn conflict_on_duplicate(err: sea_orm::DbErr, message: impl Into<String>) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message.into()),
            _ => Self::DbErr(err),
        }
    }

    /// Text shown to a Discord user when a command fails.
    ///
    /// Domain errors are shown verbatim. Infrastructure failures are logged and replaced by a
    /// generic message.
    pub fn user_message(&self) -> String {
        match self {
            Self::ModerationErr(err) => err.to_string(),
            Self::TicketErr(err) => err.to_string(),
            Self::NotFound(msg) | Self::BadRequest(msg) | Self::Conflict(msg) => msg.clone(),
            Self::AuthErr(AuthError::AccessDenied(_, _)) => {
                "You do not have permission to do that.".to_string()
            }
            Self::DiscordErr(err) => {
                tracing::error!("Discord API error while handling command: {}", err);
                "Discord rejected the request, check the bot's permissions and role position."
                    .to_string()
            }
            err => {
                tracing::error!("Error while handling command: {}", err);
                "Something went wrong, please try again later.".to_string()
            }
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict`
/// - Variable - For `AuthErr`, `ModerationErr` and `TicketErr`, delegated to the domain error
/// - 500 Internal Server Error - For everything else
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ModerationErr(err) => err.into_response(),
            Self::TicketErr(err) => err.into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            Self::Conflict(msg) => {
                (StatusCode::CONFLICT, Json(ErrorDto { error: msg })).into_response()
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error and returns a generic message so implementation details never reach the
/// client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
