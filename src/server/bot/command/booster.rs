//! `/boosters`: who is boosting the server, and a member's boost history.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse,
};

use crate::server::{
    bot::command::{embed, subcommand, CommandContext},
    data::guild::GuildRepository,
    error::AppError,
    model::booster::ServerBooster,
    service::{booster::BoosterService, embed::ResponseEmbed},
    util::time::relative,
};

pub const NAME: &str = "boosters";

/// Lines per embed, keeping the description under Discord's 4096 character limit.
const MAX_LISTED: usize = 50;

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Server boosters")
        .add_option(CreateCommandOption::new(
            CommandOptionType::SubCommand,
            "list",
            "Members currently boosting the server",
        ))
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::SubCommand,
                "history",
                "Every boost period of a member",
            )
            .add_sub_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "Member to look up")
                    .required(true),
            ),
        )
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    let service = BoosterService::new(context.db, context.ctx.http.clone());
    let guild = GuildRepository::new(context.db)
        .find_by_guild_id(guild_id)
        .await?;
    let response = ResponseEmbed::for_guild(guild.as_ref());
    let (name, options) = subcommand(context.options())?;

    match name {
        "list" => {
            let boosters = service.list_active(guild_id).await?;
            let response = response
                .title(format!("Server boosters ({})", boosters.len()))
                .description(describe_active(&boosters));
            Ok(embed(response.build()))
        }
        "history" => {
            let user_id = options.required_user("user")?;
            let history = service.history(guild_id, user_id).await?;
            let response = response
                .title("Boost history")
                .description(describe_history(user_id, &history));
            Ok(embed(response.build()))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }
}

fn describe_active(boosters: &[ServerBooster]) -> String {
    if boosters.is_empty() {
        return "Nobody is boosting the server right now.".to_string();
    }

    let mut lines: Vec<String> = boosters
        .iter()
        .take(MAX_LISTED)
        .map(|booster| {
            format!(
                "<@{}> since {}",
                booster.user_id,
                relative(booster.boosting_since)
            )
        })
        .collect();
    if boosters.len() > MAX_LISTED {
        lines.push(format!("…and {} more", boosters.len() - MAX_LISTED));
    }

    lines.join("\n")
}

fn describe_history(user_id: u64, history: &[ServerBooster]) -> String {
    if history.is_empty() {
        return format!("<@{}> has never boosted the server.", user_id);
    }

    let lines: Vec<String> = history
        .iter()
        .take(MAX_LISTED)
        .map(|booster| match booster.stopped_at {
            Some(stopped_at) => format!(
                "{} until {}",
                relative(booster.boosting_since),
                relative(stopped_at)
            ),
            None => format!("{} until now", relative(booster.boosting_since)),
        })
        .collect();

    format!("<@{}>\n{}", user_id, lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn booster(user_id: u64, stopped: bool) -> ServerBooster {
        let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        ServerBooster {
            id: 1,
            guild_id: 1,
            user_id,
            boosting_since: since,
            stopped_at: stopped.then(|| since + chrono::Duration::days(30)),
            is_disabled: stopped,
        }
    }

    #[test]
    fn empty_lists_say_so() {
        assert!(describe_active(&[]).contains("Nobody"));
        assert!(describe_history(7, &[]).contains("never boosted"));
    }

    /// Expected: Long lists are cut off with a count of the rest
    #[test]
    fn caps_active_list() {
        let boosters: Vec<_> = (0..(MAX_LISTED as u64 + 3))
            .map(|id| booster(id, false))
            .collect();

        let description = describe_active(&boosters);

        assert_eq!(description.lines().count(), MAX_LISTED + 1);
        assert!(description.ends_with("and 3 more"));
    }

    #[test]
    fn history_shows_ongoing_boost() {
        let description = describe_history(7, &[booster(7, true), booster(7, false)]);

        assert!(description.starts_with("<@7>"));
        assert!(description.contains("until now"));
        assert_eq!(description.lines().count(), 3);
    }
}
