//! `/reminder`: one-shot and recurring channel reminders.

use chrono::{DateTime, Utc};
use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse,
};

use crate::server::{
    bot::command::{embed, subcommand, text, CommandContext, Options},
    data::guild::GuildRepository,
    error::AppError,
    model::reminder::{ReminderSchedule, SetReminderParams},
    service::{
        embed::{ReminderEnricher, ResponseEmbed},
        reminder::ReminderService,
    },
    util::{
        duration::{end_after, parse_duration},
        time::relative,
    },
};

pub const NAME: &str = "reminder";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Reminders posted to a channel")
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "set", "Set a reminder")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::String, "text", "What to post")
                        .required(true),
                )
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::String,
                    "in",
                    "Post once after this long, e.g. 2h 30m",
                ))
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::String,
                    "cron",
                    "Repeat on a schedule: sec min hour day month weekday",
                ))
                .add_sub_option(
                    CreateCommandOption::new(
                        CommandOptionType::Channel,
                        "channel",
                        "Where to post, defaults to the server's reminder channel",
                    )
                    .channel_types(vec![ChannelType::Text]),
                ),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "Your reminders in this server",
        ))
        .add_option(
            CreateCommandOption::new(CommandOptionType::SubCommand, "cancel", "Cancel a reminder")
                .add_sub_option(
                    CreateCommandOption::new(CommandOptionType::Integer, "id", "Reminder number")
                        .min_int_value(1)
                        .required(true),
                ),
        )
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    let service = ReminderService::new(context.db, context.ctx.http.clone());
    let (name, options) = subcommand(context.options())?;

    match name {
        "set" => {
            let reminder = service
                .set(SetReminderParams {
                    guild_id,
                    channel_id: options.channel("channel"),
                    invoking_channel_id: context.channel_id(),
                    creator_id: context.user_id(),
                    text: options.required_string("text")?.to_string(),
                    schedule: schedule(options, Utc::now())?,
                })
                .await?;
            let guild = GuildRepository::new(context.db)
                .find_by_guild_id(guild_id)
                .await?;

            Ok(embed(
                ResponseEmbed::for_guild(guild.as_ref())
                    .enrich(&ReminderEnricher(&reminder))
                    .build(),
            ))
        }
        "list" => {
            let reminders = service.list(guild_id, context.user_id()).await?;
            if reminders.is_empty() {
                return Ok(text("You have no reminders in this server."));
            }

            let lines: Vec<String> = reminders
                .iter()
                .map(|reminder| {
                    let repeats = if reminder.is_recurring() { " (repeats)" } else { "" };
                    format!(
                        "**#{}** {} in <#{}>{}: {}",
                        reminder.id,
                        relative(reminder.set_for),
                        reminder.channel_id,
                        repeats,
                        reminder.text
                    )
                })
                .collect();
            Ok(text(lines.join("\n")))
        }
        "cancel" => {
            let id = i32::try_from(options.required_integer("id")?)
                .map_err(|_| AppError::BadRequest("Invalid reminder number".to_string()))?;
            let reminder = service.cancel(id, guild_id, context.user_id()).await?;
            Ok(text(format!("Reminder #{} cancelled.", reminder.id)))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }
}

/// Reads the schedule from exactly one of `in` and `cron`.
fn schedule(options: Options<'_>, now: DateTime<Utc>) -> Result<ReminderSchedule, AppError> {
    match (options.string("in"), options.string("cron")) {
        (Some(delay), None) => {
            let delay = parse_duration(delay)?.ok_or_else(|| {
                AppError::BadRequest("A one-off reminder needs a finite delay".to_string())
            })?;
            Ok(ReminderSchedule::Once(end_after(now, delay)?))
        }
        (None, Some(expression)) => Ok(ReminderSchedule::Recurring(expression.to_string())),
        _ => Err(AppError::BadRequest(
            "Give either 'in' or 'cron', not both".to_string(),
        )),
    }
}
