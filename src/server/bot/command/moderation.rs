//! `/mute`, `/unmute`, `/ban`, `/unban`, `/prune` and their context menu shortcuts.

use chrono::{Duration, Utc};
use serenity::all::{
    CommandOptionType, CommandType, CreateCommand, CreateCommandOption, EditInteractionResponse,
    Permissions,
};

use crate::server::{
    bot::command::{embed, text, CommandContext},
    error::AppError,
    model::{
        moderation::{ApplyOutcome, ApplyPunishmentParams, ApplyResult, LiftPunishmentParams},
        prune::{PruneFilter, PruneParams, MAX_PRUNE_COUNT},
    },
    service::{
        ban::{BanService, MAX_DELETE_MESSAGE_DAYS},
        embed::ModerationActionEnricher,
        moderation_log::ModerationLogService,
        mute::MuteService,
        prune::PruneService,
    },
    util::duration::format_duration,
};

const MUTE: &str = "mute";
const UNMUTE: &str = "unmute";
const BAN: &str = "ban";
const UNBAN: &str = "unban";
const PRUNE: &str = "prune";
const MUTE_MENU: &str = "Mute for 1 hour";
const UNMUTE_MENU: &str = "Unmute";
const PRUNE_MENU: &str = "Prune up to here";

fn user_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
}

fn reason_option() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, "reason", "Why")
}

pub fn register() -> Vec<CreateCommand> {
    vec![
        CreateCommand::new(MUTE)
            .description("Mute a member, or extend their mute")
            .add_option(user_option("Member to mute"))
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "duration",
                    "How long, e.g. 30m, 1h 30m, 2days or perm",
                )
                .required(true),
            )
            .add_option(reason_option())
            .default_member_permissions(Permissions::MODERATE_MEMBERS)
            .dm_permission(false),
        CreateCommand::new(UNMUTE)
            .description("Lift a member's mute")
            .add_option(user_option("Member to unmute"))
            .add_option(reason_option())
            .default_member_permissions(Permissions::MODERATE_MEMBERS)
            .dm_permission(false),
        CreateCommand::new(BAN)
            .description("Ban a user, or extend their ban")
            .add_option(user_option("User to ban"))
            .add_option(CreateCommandOption::new(
                CommandOptionType::String,
                "duration",
                "How long, e.g. 7days; permanent when left out",
            ))
            .add_option(reason_option())
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "delete_message_days",
                    "Days of their messages to delete",
                )
                .min_int_value(0)
                .max_int_value(MAX_DELETE_MESSAGE_DAYS as u64),
            )
            .default_member_permissions(Permissions::BAN_MEMBERS)
            .dm_permission(false),
        CreateCommand::new(UNBAN)
            .description("Lift a ban")
            .add_option(user_option("User to unban"))
            .add_option(reason_option())
            .default_member_permissions(Permissions::BAN_MEMBERS)
            .dm_permission(false),
        CreateCommand::new(PRUNE)
            .description("Delete recent messages in this channel")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "count",
                    "Number of messages to delete",
                )
                .required(true)
                .min_int_value(1)
                .max_int_value(MAX_PRUNE_COUNT as u64),
            )
            .add_option(CreateCommandOption::new(
                CommandOptionType::User,
                "user",
                "Only delete messages from this user",
            ))
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .dm_permission(false),
        CreateCommand::new(MUTE_MENU)
            .kind(CommandType::User)
            .default_member_permissions(Permissions::MODERATE_MEMBERS)
            .dm_permission(false),
        CreateCommand::new(UNMUTE_MENU)
            .kind(CommandType::User)
            .default_member_permissions(Permissions::MODERATE_MEMBERS)
            .dm_permission(false),
        CreateCommand::new(PRUNE_MENU)
            .kind(CommandType::Message)
            .default_member_permissions(Permissions::MANAGE_MESSAGES)
            .dm_permission(false),
    ]
}

/// Runs `name` if it is one of the moderation commands.
pub async fn run(
    context: &CommandContext<'_>,
    name: &str,
) -> Option<Result<EditInteractionResponse, AppError>> {
    let result = match name {
        MUTE => mute(context).await,
        UNMUTE => unmute(context).await,
        BAN => ban(context).await,
        UNBAN => unban(context).await,
        PRUNE => prune(context).await,
        MUTE_MENU => mute_for_an_hour(context).await,
        UNMUTE_MENU => unmute_target(context).await,
        PRUNE_MENU => prune_up_to_here(context).await,
        _ => return None,
    };

    Some(result)
}

fn target_id(context: &CommandContext<'_>) -> Result<u64, AppError> {
    context
        .command
        .data
        .target_id
        .map(|target| target.get())
        .ok_or_else(|| AppError::BadRequest("Missing target".to_string()))
}

async fn mute(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let options = context.options();
    let params = ApplyPunishmentParams::from_request(
        context.guild_id()?,
        options.required_user("user")?,
        context.user_id(),
        options.required_string("duration")?,
        options.string("reason").map(str::to_string),
        Utc::now(),
    )?;

    apply_mute(context, params).await
}

async fn mute_for_an_hour(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let params = ApplyPunishmentParams {
        guild_id: context.guild_id()?,
        user_id: target_id(context)?,
        moderator_id: context.user_id(),
        applied_until: Some(Utc::now() + Duration::hours(1)),
        reason: None,
    };

    apply_mute(context, params).await
}

async fn apply_mute(
    context: &CommandContext<'_>,
    params: ApplyPunishmentParams,
) -> Result<EditInteractionResponse, AppError> {
    let guild_id = params.guild_id;
    let result = MuteService::new(context.db, context.ctx.http.clone())
        .mute(params)
        .await?;

    punishment_reply(context, guild_id, "Muted", "muted", result).await
}

async fn unmute(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let options = context.options();
    let user_id = options.required_user("user")?;
    let reason = options.string("reason").map(str::to_string);

    lift_mute(context, user_id, reason).await
}

async fn unmute_target(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    lift_mute(context, target_id(context)?, None).await
}

async fn lift_mute(
    context: &CommandContext<'_>,
    user_id: u64,
    reason: Option<String>,
) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    MuteService::new(context.db, context.ctx.http.clone())
        .unmute(LiftPunishmentParams {
            guild_id,
            user_id,
            lifted_by_id: context.user_id(),
            reason: reason.clone(),
        })
        .await?;

    lift_reply(context, guild_id, "Unmuted", user_id, reason.as_deref()).await
}

async fn ban(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let options = context.options();
    let guild_id = context.guild_id()?;
    let delete_message_days = options.integer("delete_message_days").unwrap_or(0);
    let delete_message_days = u8::try_from(delete_message_days)
        .map_err(|_| AppError::BadRequest("Invalid number of days".to_string()))?;

    let params = ApplyPunishmentParams::from_request(
        guild_id,
        options.required_user("user")?,
        context.user_id(),
        options.string("duration").unwrap_or("perm"),
        options.string("reason").map(str::to_string),
        Utc::now(),
    )?;

    let result = BanService::new(context.db, context.ctx.http.clone())
        .ban(params, delete_message_days)
        .await?;

    punishment_reply(context, guild_id, "Banned", "banned", result).await
}

async fn unban(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let options = context.options();
    let guild_id = context.guild_id()?;
    let user_id = options.required_user("user")?;
    let reason = options.string("reason").map(str::to_string);

    BanService::new(context.db, context.ctx.http.clone())
        .unban(LiftPunishmentParams {
            guild_id,
            user_id,
            lifted_by_id: context.user_id(),
            reason: reason.clone(),
        })
        .await?;

    lift_reply(context, guild_id, "Unbanned", user_id, reason.as_deref()).await
}

async fn prune(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let options = context.options();
    let count = u8::try_from(options.required_integer("count")?)
        .map_err(|_| AppError::BadRequest("Invalid message count".to_string()))?;

    run_prune(
        context,
        PruneFilter {
            count,
            target_user_id: options.user("user"),
            ..Default::default()
        },
    )
    .await
}

/// Deletes the target message and everything sent after it, up to the prune limit.
async fn prune_up_to_here(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    run_prune(
        context,
        PruneFilter {
            count: MAX_PRUNE_COUNT,
            since_message_id: Some(target_id(context)?),
            ..Default::default()
        },
    )
    .await
}

async fn run_prune(
    context: &CommandContext<'_>,
    filter: PruneFilter,
) -> Result<EditInteractionResponse, AppError> {
    let prune = PruneService::new(
        context.db,
        context.ctx.http.clone(),
        context.task_queue.clone(),
    )
    .prune(PruneParams {
        guild_id: context.guild_id()?,
        channel_id: context.channel_id(),
        moderator_id: context.user_id(),
        filter,
    })
    .await?;

    Ok(text(match prune.deleted_count {
        0 => "No messages matched, nothing was deleted.".to_string(),
        1 => "Deleted 1 message.".to_string(),
        n => format!("Deleted {} messages.", n),
    }))
}

async fn punishment_reply(
    context: &CommandContext<'_>,
    guild_id: u64,
    action: &str,
    verb: &str,
    result: ApplyResult,
) -> Result<EditInteractionResponse, AppError> {
    let punishment = result.punishment;

    if result.outcome == ApplyOutcome::AlreadyLonger {
        let remaining = punishment
            .applied_until
            .map(|until| until - Utc::now());
        return Ok(text(format!(
            "<@{}> is already {} for longer ({} left), nothing changed.",
            punishment.user_id,
            verb,
            format_duration(remaining)
        )));
    }

    let title = match result.outcome {
        ApplyOutcome::Extended => format!("{} (extended)", action),
        _ => action.to_string(),
    };
    let reply = ModerationLogService::new(context.db, context.ctx.http.clone())
        .embed(guild_id)
        .await?
        .enrich(&ModerationActionEnricher {
            action: &title,
            target_id: Some(punishment.user_id),
            moderator_id: punishment.applied_by_id,
            reason: punishment.reason.as_deref(),
            until: Some(punishment.applied_until),
        })
        .build();

    Ok(embed(reply))
}

async fn lift_reply(
    context: &CommandContext<'_>,
    guild_id: u64,
    action: &str,
    user_id: u64,
    reason: Option<&str>,
) -> Result<EditInteractionResponse, AppError> {
    let reply = ModerationLogService::new(context.db, context.ctx.http.clone())
        .embed(guild_id)
        .await?
        .enrich(&ModerationActionEnricher {
            action,
            target_id: Some(user_id),
            moderator_id: context.user_id(),
            reason,
            until: None,
        })
        .build();

    Ok(embed(reply))
}
