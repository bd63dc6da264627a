use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, ticket::PaginatedTicketsDto},
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::ticket::TicketService,
        state::AppState,
    },
};

/// Tag for grouping ticket endpoints in OpenAPI documentation
pub static TICKET_TAG: &str = "ticket";

/// List the guild's tickets, newest first, including closed and deleted ones.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tickets",
    tag = TICKET_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of tickets", body = PaginatedTicketsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tickets(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let tickets = TicketService::new(
        &state.db,
        state.discord_http.clone(),
        state.task_queue.clone(),
    )
    .list(guild_id, params.page, params.entries)
    .await?;

    Ok((StatusCode::OK, Json(tickets.into_dto())))
}
