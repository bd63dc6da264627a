use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serenity::all::ChannelId;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        moderation::{
            ApplyPunishmentResultDto, CreateBanDto, CreateMuteDto, CreatePruneDto,
            PaginatedPunishmentsDto, PruneDto, PunishmentDto,
        },
    },
    server::{
        controller::param::{LiftParam, PaginationParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            moderation::{ApplyPunishmentParams, LiftPunishmentParams},
            prune::{PruneFilter, PruneParams},
        },
        service::{ban::BanService, mute::MuteService, prune::PruneService},
        state::AppState,
        util::snowflake::require_id,
    },
};

/// Tag for grouping moderation endpoints in OpenAPI documentation
pub static MODERATION_TAG: &str = "moderation";

/// List the guild's active mutes.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/mutes",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of active mutes", body = PaginatedPunishmentsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_mutes(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let mutes = MuteService::new(&state.db, state.discord_http.clone())
        .list_active(guild_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(mutes.into_dto())))
}

/// Mute a member or extend their mute.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
///
/// # Arguments
/// - `payload` - Target user, duration such as `1h 30m` or `perm`, optional reason
///
/// # Returns
/// - `200 OK` - The mute and whether it was created, extended or already longer
/// - `400 Bad Request` - Invalid duration or no mute role configured
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/mutes",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateMuteDto,
    responses(
        (status = 200, description = "Mute applied", body = ApplyPunishmentResultDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_mute(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateMuteDto>,
) -> Result<impl IntoResponse, AppError> {
    let moderator_id = AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let params = ApplyPunishmentParams::from_mute_dto(payload, guild_id, moderator_id, Utc::now())?;
    let result = MuteService::new(&state.db, state.discord_http.clone())
        .mute(params)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Lift a member's mute.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
///
/// # Returns
/// - `200 OK` - The lifted mute
/// - `404 Not Found` - The user is not muted
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/mutes/{user_id}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("user_id" = String, Path, description = "Discord user ID"),
        LiftParam
    ),
    responses(
        (status = 200, description = "Mute lifted", body = PunishmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User is not muted", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_mute(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, user_id)): Path<(u64, u64)>,
    Query(params): Query<LiftParam>,
) -> Result<impl IntoResponse, AppError> {
    let moderator_id = AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let mute = MuteService::new(&state.db, state.discord_http.clone())
        .unmute(LiftPunishmentParams {
            guild_id,
            user_id: require_id(user_id, "user")?,
            lifted_by_id: moderator_id,
            reason: params.reason,
        })
        .await?;

    Ok((StatusCode::OK, Json(mute.into_dto())))
}

/// List the guild's active bans.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
#[utoipa::path(
    get,
    path = "/api/guilds/{guild_id}/bans",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        PaginationParam
    ),
    responses(
        (status = 200, description = "One page of active bans", body = PaginatedPunishmentsDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bans(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Query(params): Query<PaginationParam>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let bans = BanService::new(&state.db, state.discord_http.clone())
        .list_active(guild_id, params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(bans.into_dto())))
}

/// Ban a user or extend their ban.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
///
/// # Returns
/// - `200 OK` - The ban and whether it was created, extended or already longer
/// - `400 Bad Request` - Invalid duration or more than 7 days of messages to delete
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/bans",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreateBanDto,
    responses(
        (status = 200, description = "Ban applied", body = ApplyPunishmentResultDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_ban(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreateBanDto>,
) -> Result<impl IntoResponse, AppError> {
    let moderator_id = AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let delete_message_days = payload.delete_message_days;
    let params = ApplyPunishmentParams::from_ban_dto(payload, guild_id, moderator_id, Utc::now())?;
    let result = BanService::new(&state.db, state.discord_http.clone())
        .ban(params, delete_message_days)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}

/// Lift a ban.
///
/// Bans applied by hand in Discord can be lifted too, in which case nothing is returned.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
///
/// # Returns
/// - `200 OK` - The lifted ban record
/// - `204 No Content` - Only a Discord-side ban existed
/// - `404 Not Found` - The user is not banned
#[utoipa::path(
    delete,
    path = "/api/guilds/{guild_id}/bans/{user_id}",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID"),
        ("user_id" = String, Path, description = "Discord user ID"),
        LiftParam
    ),
    responses(
        (status = 200, description = "Ban lifted", body = PunishmentDto),
        (status = 204, description = "Discord-side ban lifted"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 404, description = "User is not banned", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_ban(
    State(state): State<AppState>,
    session: Session,
    Path((guild_id, user_id)): Path<(u64, u64)>,
    Query(params): Query<LiftParam>,
) -> Result<Response, AppError> {
    let moderator_id = AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let ban = BanService::new(&state.db, state.discord_http.clone())
        .unban(LiftPunishmentParams {
            guild_id,
            user_id: require_id(user_id, "user")?,
            lifted_by_id: moderator_id,
            reason: params.reason,
        })
        .await?;

    Ok(match ban {
        Some(ban) => (StatusCode::OK, Json(ban.into_dto())).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}

/// Delete recent messages from a channel of the guild.
///
/// # Access Control
/// - `Moderate` - Any of `BAN_MEMBERS`, `MODERATE_MEMBERS`, `MANAGE_MESSAGES`
///
/// # Returns
/// - `201 Created` - The prune record with the number of messages actually deleted
/// - `400 Bad Request` - Count outside 1..=99 or the channel is not in this guild
#[utoipa::path(
    post,
    path = "/api/guilds/{guild_id}/prunes",
    tag = MODERATION_TAG,
    params(
        ("guild_id" = String, Path, description = "Discord guild ID")
    ),
    request_body = CreatePruneDto,
    responses(
        (status = 201, description = "Messages pruned", body = PruneDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Missing permission", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_prune(
    State(state): State<AppState>,
    session: Session,
    Path(guild_id): Path<u64>,
    Json(payload): Json<CreatePruneDto>,
) -> Result<impl IntoResponse, AppError> {
    let moderator_id = AuthGuard::new(&state.discord_http, &session)
        .require(guild_id, Permission::Moderate)
        .await?;

    let channel = state
        .discord_http
        .get_channel(ChannelId::new(require_id(payload.channel_id, "channel")?))
        .await?;
    if channel.guild().map(|channel| channel.guild_id.get()) != Some(guild_id) {
        return Err(AppError::BadRequest(format!(
            "Channel {} is not in this server",
            payload.channel_id
        )));
    }

    let prune = PruneService::new(
        &state.db,
        state.discord_http.clone(),
        state.task_queue.clone(),
    )
    .prune(PruneParams {
        guild_id,
        channel_id: payload.channel_id,
        moderator_id,
        filter: PruneFilter {
            count: payload.count,
            target_user_id: payload.target_user_id,
            ..Default::default()
        },
    })
    .await?;

    Ok((StatusCode::CREATED, Json(prune.into_dto())))
}
