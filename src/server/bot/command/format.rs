//! `/format`: regex formats that messages in a channel must match.

use serenity::all::{
    ChannelType, CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse,
    Permissions,
};

use crate::server::{
    bot::command::{subcommand, text, CommandContext},
    error::AppError,
    model::message_format::SetMessageFormatParams,
    service::message_format::MessageFormatService,
};

pub const NAME: &str = "format";

fn channel_option() -> CreateCommandOption {
    CreateCommandOption::new(
        CommandOptionType::Channel,
        "channel",
        "Channel to configure, defaults to this one",
    )
    .channel_types(vec![ChannelType::Text])
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Enforce a message format in a channel")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "set",
                "Require messages to match a regular expression",
            )
            .add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "pattern",
                    "Regular expression messages must match",
                )
                .required(true),
            )
            .add_sub_option(channel_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "remove",
                "Stop enforcing the format",
            )
            .add_sub_option(channel_option()),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "show",
                "Show the enforced format",
            )
            .add_sub_option(channel_option()),
        )
        .default_member_permissions(Permissions::MANAGE_CHANNELS)
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    let service = MessageFormatService::new(context.db);
    let (name, options) = subcommand(context.options())?;
    let channel_id = options.channel("channel").unwrap_or(context.channel_id());

    match name {
        "set" => {
            let format = service
                .set(SetMessageFormatParams {
                    guild_id,
                    channel_id,
                    pattern: options.required_string("pattern")?.to_string(),
                    moderator_id: context.user_id(),
                })
                .await?;
            Ok(text(format!(
                "Messages in <#{}> must now match `{}`",
                channel_id, format.pattern
            )))
        }
        "remove" => {
            service.remove(channel_id, context.user_id()).await?;
            Ok(text(format!("<#{}> no longer enforces a format.", channel_id)))
        }
        "show" => match service.get(channel_id).await? {
            Some(format) if !format.is_disabled => Ok(text(format!(
                "Messages in <#{}> must match `{}`",
                channel_id, format.pattern
            ))),
            _ => Ok(text(format!("<#{}> has no message format.", channel_id))),
        },
        other => Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }
}
