use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Ticket lifecycle violations.
#[derive(Error, Debug)]
pub enum TicketError {
    #[error("Ticketing is not configured for this server, set it up with /config ticketing")]
    NotConfigured,

    /// The user already has an open ticket in the given channel.
    #[error("You already have an open ticket: <#{0}>")]
    AlreadyOpen(u64),

    #[error("This channel is not a ticket")]
    NotATicket,

    #[error("This ticket is already closed")]
    AlreadyClosed,

    #[error("This ticket is not closed")]
    NotClosed,
}

impl IntoResponse for TicketError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NotConfigured => StatusCode::BAD_REQUEST,
            Self::NotATicket => StatusCode::NOT_FOUND,
            Self::AlreadyOpen(_) | Self::AlreadyClosed | Self::NotClosed => StatusCode::CONFLICT,
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
