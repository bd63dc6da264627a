use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rule violations raised by mute, ban and prune operations.
#[derive(Error, Debug)]
pub enum ModerationError {
    /// The requested end of the punishment is not in the future.
    #[error("The punishment must end in the future")]
    DurationInPast,

    /// The guild has no mute role configured.
    #[error("No mute role is configured for this server, set one with /config moderation")]
    MuteRoleNotConfigured,

    /// There is no active mute for the user.
    #[error("User {0} is not muted")]
    NotMuted(u64),

    /// There is no active ban for the user.
    #[error("User {0} is not banned")]
    NotBanned(u64),
}

impl IntoResponse for ModerationError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::DurationInPast | Self::MuteRoleNotConfigured => StatusCode::BAD_REQUEST,
            Self::NotMuted(_) | Self::NotBanned(_) => StatusCode::NOT_FOUND,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
