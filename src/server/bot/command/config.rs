//! `/config`: guild settings, moderation and ticketing configuration.

use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse,
    Permissions,
};

use crate::server::{
    bot::command::{embed, subcommand, text, CommandContext, Options},
    error::AppError,
    model::{
        embed::EmbedConfigParams,
        guild::{GuildWithConfigs, UpsertModerationConfigParams, UpsertTicketingConfigParams},
    },
    service::{embed::ResponseEmbed, guild::GuildService},
    util::{
        color::parse_hex_color,
        duration::{format_duration, parse_duration},
    },
};

pub const NAME: &str = "config";

fn channel(name: &str, description: &str, kind: ChannelType) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Channel, name, description)
        .channel_types(vec![kind])
}

fn string(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description)
}

fn disabled() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Boolean, "disabled", "Turn the feature off")
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Configure the bot for this server")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "moderation",
                "Mute role and log channels",
            )
            .add_sub_option(CreateCommandOption::new(
                CommandOptionType::Role,
                "mute_role",
                "Role given to muted members",
            ))
            .add_sub_option(channel(
                "log_channel",
                "Where moderation actions are logged",
                ChannelType::Text,
            ))
            .add_sub_option(channel(
                "member_events_channel",
                "Where boosts and other member events are posted",
                ChannelType::Text,
            ))
            .add_sub_option(channel(
                "message_log_channel",
                "Where messages removed by the bot are logged",
                ChannelType::Text,
            ))
            .add_sub_option(disabled()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "ticketing",
                "Ticket categories, names and automatic cleanup",
            )
            .add_sub_option(channel(
                "open_category",
                "Category for open tickets",
                ChannelType::Category,
            ))
            .add_sub_option(channel(
                "closed_category",
                "Category for closed tickets",
                ChannelType::Category,
            ))
            .add_sub_option(channel(
                "log_channel",
                "Where ticket events and transcripts are posted",
                ChannelType::Text,
            ))
            .add_sub_option(string("open_prefix", "Name prefix of open tickets"))
            .add_sub_option(string("closed_prefix", "Name prefix of closed tickets"))
            .add_sub_option(string("welcome_message", "Posted when a ticket is opened"))
            .add_sub_option(string(
                "close_after",
                "Close open tickets after this much inactivity, e.g. 3days",
            ))
            .add_sub_option(string(
                "clean_after",
                "Delete closed tickets this long after closing, e.g. 1week",
            ))
            .add_sub_option(disabled()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "ticket_center",
                "Customise the \"open a ticket\" message",
            )
            .add_sub_option(string("title", "Embed title"))
            .add_sub_option(string("description", "Embed description"))
            .add_sub_option(string("color", "Embed colour as #RRGGBB")),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "guild",
                "Embed colour and default reminder channel",
            )
            .add_sub_option(string("embed_color", "Embed colour as #RRGGBB"))
            .add_sub_option(channel(
                "reminder_channel",
                "Default channel for reminders",
                ChannelType::Text,
            )),
        )
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "show",
            "Show the current configuration",
        ))
        .default_member_permissions(Permissions::MANAGE_GUILD)
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    let service = GuildService::new(context.db);
    let (name, options) = subcommand(context.options())?;

    match name {
        "moderation" => {
            service
                .upsert_moderation_config(moderation_params(guild_id, options))
                .await?;
        }
        "ticketing" => {
            service
                .upsert_ticketing_config(ticketing_params(guild_id, options)?)
                .await?;
        }
        "ticket_center" => {
            let color = options.string("color").map(str::to_string);
            if let Some(color) = &color {
                parse_hex_color(color)?;
            }
            service
                .set_ticket_center_embed(EmbedConfigParams {
                    guild_id,
                    title: options.string("title").map(str::to_string),
                    description: options.string("description").map(str::to_string),
                    color,
                    ..Default::default()
                })
                .await?;
            return Ok(text(
                "Ticket center updated, post it with /ticket center to see the change.",
            ));
        }
        "guild" => {
            if let Some(color) = options.string("embed_color") {
                service
                    .set_embed_color(guild_id, Some(color.to_string()))
                    .await?;
            }
            if let Some(channel_id) = options.channel("reminder_channel") {
                service
                    .set_reminder_channel(guild_id, Some(channel_id))
                    .await?;
            }
        }
        "show" => {}
        other => return Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }

    let guild = service.get(guild_id).await?;
    Ok(embed(describe(&guild).build()))
}

fn moderation_params(guild_id: u64, options: Options<'_>) -> UpsertModerationConfigParams {
    UpsertModerationConfigParams {
        guild_id,
        mute_role_id: options.role("mute_role"),
        moderation_log_channel_id: options.channel("log_channel"),
        member_events_log_channel_id: options.channel("member_events_channel"),
        message_log_channel_id: options.channel("message_log_channel"),
        is_disabled: options.boolean("disabled"),
    }
}

fn ticketing_params(
    guild_id: u64,
    options: Options<'_>,
) -> Result<UpsertTicketingConfigParams, AppError> {
    let delay = |name: &str| -> Result<Option<chrono::Duration>, AppError> {
        match options.string(name) {
            Some(input) => parse_duration(input)?.map(Some).ok_or_else(|| {
                AppError::BadRequest(format!("'{}' needs a finite duration", name))
            }),
            None => Ok(None),
        }
    };

    Ok(UpsertTicketingConfigParams {
        guild_id,
        open_category_id: options.channel("open_category"),
        closed_category_id: options.channel("closed_category"),
        log_channel_id: options.channel("log_channel"),
        open_name_prefix: options.string("open_prefix").map(str::to_string),
        closed_name_prefix: options.string("closed_prefix").map(str::to_string),
        welcome_message: options.string("welcome_message").map(str::to_string),
        close_after: delay("close_after")?,
        clean_after: delay("clean_after")?,
        center_embed_config_id: None,
        is_disabled: options.boolean("disabled"),
    })
}

fn channel_value(channel_id: Option<u64>) -> String {
    channel_id
        .map(|id| format!("<#{}>", id))
        .unwrap_or_else(|| "not set".to_string())
}

/// Summary embed of a guild's configuration.
fn describe(guild: &GuildWithConfigs) -> ResponseEmbed {
    let mut embed = ResponseEmbed::for_guild(Some(&guild.guild))
        .title(format!("Configuration of {}", guild.guild.name))
        .field(
            "Embed colour",
            guild.guild.embed_color.as_deref().unwrap_or("default"),
            true,
        )
        .field(
            "Reminder channel",
            channel_value(guild.guild.reminder_channel_id),
            true,
        );

    embed = match &guild.moderation {
        Some(moderation) => embed.field(
            "Moderation",
            format!(
                "Mute role: {}\nLog: {}\nMember events: {}\nMessage log: {}{}",
                moderation
                    .mute_role_id
                    .map(|id| format!("<@&{}>", id))
                    .unwrap_or_else(|| "not set".to_string()),
                channel_value(moderation.moderation_log_channel_id),
                channel_value(moderation.member_events_log_channel_id),
                channel_value(moderation.message_log_channel_id),
                if moderation.is_disabled { "\n**Disabled**" } else { "" },
            ),
            false,
        ),
        None => embed.field("Moderation", "Not configured", false),
    };

    match &guild.ticketing {
        Some(ticketing) => embed.field(
            "Ticketing",
            format!(
                "Open: {} (`{}-`)\nClosed: {} (`{}-`)\nLog: {}\nAuto-close: {}\nCleanup: {}\nTickets so far: {}{}",
                channel_value(ticketing.open_category_id),
                ticketing.open_name_prefix,
                channel_value(ticketing.closed_category_id),
                ticketing.closed_name_prefix,
                channel_value(ticketing.log_channel_id),
                ticketing
                    .close_after
                    .map(|d| format_duration(Some(d)))
                    .unwrap_or_else(|| "off".to_string()),
                ticketing
                    .clean_after
                    .map(|d| format_duration(Some(d)))
                    .unwrap_or_else(|| "off".to_string()),
                ticketing.last_ticket_id,
                if ticketing.is_disabled { "\n**Disabled**" } else { "" },
            ),
            false,
        ),
        None => embed.field("Ticketing", "Not configured", false),
    }
}
