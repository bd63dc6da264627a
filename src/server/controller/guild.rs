use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, guild::GuildDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::guild::GuildService,
        state::AppState,
    },
};

/// Tag for grouping guild endpoints in OpenAPI documentation
pub static GUILD_TAG: &str = "guild";

/// Get a guild's settings with its moderation and ticketing configuration.
///
/// # Access Control
/// - `ManageGuild` - Owner, administrator or `MANAGE_GUILD`
///
/// # Returns
/// - `200 OK` - The guild
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Missing permission
/// - `404 Not Found` - The bot does not know the guild
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}",
    tag = GUILD_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    responses(
        (status = 200, description = "The guild", body = GuildDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "Guild not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_guild(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::ManageGuild)
        .await?;

    let guild = GuildService::new(&state.db).get(guild_id).await?;

    Ok((StatusCode::OK, Json(guild.into_dto())))
}
