use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, tag::PaginatedTagsDto},
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::tag::TagService,
        state::AppState,
    },
};

/// Tag for grouping tag endpoints in OpenAPI documentation
pub static TAG_TAG: &str = "tag";

/// List the guild's tags ordered by name.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/tags",
    tag = TAG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of tags", body = PaginatedTagsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tags(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let tags = TagService::new(&state.db)
        .list(guild_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(tags.into_dto())))
}
