use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, audit_log::PaginatedAuditLogDto},
    server::{
        controller::param::PaginationParam,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::audit_log::AuditLogService,
        state::AppState,
    },
};

/// Tag for grouping audit log endpoints in OpenAPI documentation
pub static AUDIT_LOG_TAG: &str = "audit-log";

/// Get the guild's moderation audit log, newest first.
///
/// # Access Control
/// - `ManageGuild` - Owner, administrator or `MANAGE_GUILD`
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/audit-log",
    tag = AUDIT_LOG_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of audit log entries", body = PaginatedAuditLogDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_audit_log(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::ManageGuild)
        .await?;

    let entries = AuditLogService::new(&state.db)
        .get_paginated(guild_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto())))
}
