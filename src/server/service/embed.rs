//! Embed building for bot responses and log messages.
//!
//! `ResponseEmbed` starts from the guild colour and lets any number of `EmbedEnricher`s add
//! their fields. Enrichers only add; later enrichers overwrite single-valued fields such as
//! the title.

use chrono::{DateTime, Utc};
use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Timestamp};

use crate::server::{
    model::{
        booster::ServerBooster, embed::EmbedConfig, guild::Guild, reminder::Reminder,
        ticket::Ticket,
    },
    util::{color::parse_hex_color, time::relative},
};

/// Blurple, used when a guild has no embed colour.
pub const DEFAULT_COLOR: u32 = 0x5865F2;

/// Adds fields to an embed under construction.
pub trait EmbedEnricher {
    fn enrich(&self, embed: CreateEmbed) -> CreateEmbed;
}

/// Builder for every embed the bot sends.
pub struct ResponseEmbed {
    embed: CreateEmbed,
}

impl ResponseEmbed {
    pub fn new(color: u32) -> Self {
        Self {
            embed: CreateEmbed::new()
                .colour(Colour::new(color))
                .timestamp(Timestamp::now()),
        }
    }

    /// Starts an embed in the guild's colour, falling back to the default.
    pub fn for_guild(guild: Option<&Guild>) -> Self {
        Self::new(guild_color(guild))
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.embed = self.embed.title(title);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.embed = self.embed.description(description);
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.embed = self.embed.field(name, value, inline);
        self
    }

    pub fn enrich(mut self, enricher: &impl EmbedEnricher) -> Self {
        self.embed = enricher.enrich(self.embed);
        self
    }

    pub fn build(self) -> CreateEmbed {
        self.embed
    }
}

/// The guild's embed colour, or the default when unset or malformed.
pub fn guild_color(guild: Option<&Guild>) -> u32 {
    guild
        .and_then(|g| g.embed_color.as_deref())
        .and_then(|hex| parse_hex_color(hex).ok())
        .unwrap_or(DEFAULT_COLOR)
}

/// Mute, ban, unmute, unban and prune log entries.
pub struct ModerationActionEnricher<'a> {
    pub action: &'a str,
    pub target_id: Option<u64>,
    pub moderator_id: u64,
    pub reason: Option<&'a str>,
    /// `Some(None)` for an indefinite punishment, `None` when the action has no end.
    pub until: Option<Option<DateTime<Utc>>>,
}

impl EmbedEnricher for ModerationActionEnricher<'_> {
    fn enrich(&self, embed: CreateEmbed) -> CreateEmbed {
        let mut embed = embed
            .title(self.action.to_string())
            .field("Moderator", format!("<@{}>", self.moderator_id), true);

        if let Some(target_id) = self.target_id {
            embed = embed.field("User", format!("<@{}> ({})", target_id, target_id), true);
        }
        if let Some(until) = self.until {
            let value = match until {
                Some(time) => format!("{} ({})", relative(time), time.format("%Y-%m-%d %H:%M UTC")),
                None => "Permanent".to_string(),
            };
            embed = embed.field("Until", value, false);
        }

        embed.field("Reason", self.reason.unwrap_or("No reason given"), false)
    }
}

/// Applies a stored embed layout.
pub struct EmbedConfigEnricher<'a>(pub &'a EmbedConfig);

impl EmbedEnricher for EmbedConfigEnricher<'_> {
    fn enrich(&self, mut embed: CreateEmbed) -> CreateEmbed {
        let config = self.0;

        if let Some(title) = &config.title {
            embed = embed.title(title);
        }
        if let Some(description) = &config.description {
            embed = embed.description(description);
        }
        if let Some(color) = config.color.as_deref().and_then(|c| parse_hex_color(c).ok()) {
            embed = embed.colour(Colour::new(color));
        }
        if let Some(author) = &config.author {
            embed = embed.author(CreateEmbedAuthor::new(author));
        }
        if let Some(footer) = &config.footer {
            embed = embed.footer(CreateEmbedFooter::new(footer));
        }
        if let Some(url) = &config.image_url {
            embed = embed.image(url);
        }
        if let Some(url) = &config.thumbnail_url {
            embed = embed.thumbnail(url);
        }

        embed
    }
}

/// Ticket summary shown in ticket channels and the ticket log.
pub struct TicketEnricher<'a>(pub &'a Ticket);

impl EmbedEnricher for TicketEnricher<'_> {
    fn enrich(&self, embed: CreateEmbed) -> CreateEmbed {
        let ticket = self.0;
        let mut embed = embed
            .field("Ticket", format!("#{:04}", ticket.number), true)
            .field("Owner", format!("<@{}>", ticket.user_id), true)
            .field("State", ticket.state().as_str(), true);

        if let (Some(by), Some(on)) = (ticket.closed_by_id, ticket.closed_on) {
            embed = embed.field("Closed", format!("by <@{}> {}", by, relative(on)), false);
        }

        embed
    }
}

pub struct ReminderEnricher<'a>(pub &'a Reminder);

impl EmbedEnricher for ReminderEnricher<'_> {
    fn enrich(&self, embed: CreateEmbed) -> CreateEmbed {
        let reminder = self.0;
        let mut embed = embed
            .title(format!("Reminder #{}", reminder.id))
            .description(reminder.text.clone())
            .field("Next", relative(reminder.set_for), true)
            .field("Channel", format!("<#{}>", reminder.channel_id), true);

        if let Some(expression) = &reminder.cron_expression {
            embed = embed.field("Repeats", format!("`{}`", expression), true);
        }

        embed
    }
}

/// Booster start or stop notice for the member events log.
pub struct BoosterEnricher<'a> {
    pub booster: &'a ServerBooster,
    pub started: bool,
}

impl EmbedEnricher for BoosterEnricher<'_> {
    fn enrich(&self, embed: CreateEmbed) -> CreateEmbed {
        let booster = self.booster;
        let title = if self.started {
            "Server boost started"
        } else {
            "Server boost ended"
        };

        let mut embed = embed
            .title(title)
            .field("Member", format!("<@{}>", booster.user_id), true)
            .field("Since", relative(booster.boosting_since), true);

        if let Some(stopped_at) = booster.stopped_at {
            let days = (stopped_at - booster.boosting_since).num_days();
            embed = embed.field("Boosted for", format!("{} days", days), true);
        }

        embed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn json(embed: CreateEmbed) -> Value {
        serde_json::to_value(embed).unwrap()
    }

    #[test]
    fn falls_back_to_default_color() {
        assert_eq!(guild_color(None), DEFAULT_COLOR);
    }

    #[test]
    fn uses_guild_color() {
        let guild = Guild {
            id: 1,
            guild_id: 1,
            name: "g".to_string(),
            embed_color: Some("#112233".to_string()),
            reminder_channel_id: None,
            is_disabled: false,
            created_at: Utc::now(),
        };

        assert_eq!(guild_color(Some(&guild)), 0x112233);
    }

    #[test]
    fn embed_config_overrides_title_and_color() {
        let config = EmbedConfig {
            title: Some("Rules".to_string()),
            color: Some("#00FF00".to_string()),
            ..Default::default()
        };

        let value = json(
            ResponseEmbed::new(DEFAULT_COLOR)
                .title("ignored")
                .enrich(&EmbedConfigEnricher(&config))
                .build(),
        );

        assert_eq!(value["title"], "Rules");
        assert_eq!(value["color"], 0x00FF00);
    }

    #[test]
    fn moderation_action_lists_fields() {
        let value = json(
            ResponseEmbed::new(DEFAULT_COLOR)
                .enrich(&ModerationActionEnricher {
                    action: "Muted",
                    target_id: Some(5),
                    moderator_id: 6,
                    reason: None,
                    until: Some(None),
                })
                .build(),
        );

        assert_eq!(value["title"], "Muted");
        let fields = value["fields"].as_array().unwrap();
        let names: Vec<&str> = fields.iter().filter_map(|f| f["name"].as_str()).collect();
        assert_eq!(names, vec!["Moderator", "User", "Until", "Reason"]);
        assert_eq!(fields[2]["value"], "Permanent");
        assert_eq!(fields[3]["value"], "No reason given");
    }
}
