//! Guild and per-guild configuration models.

use chrono::{DateTime, Duration, Utc};

use crate::{
    model::guild::{GuildDto, ModerationConfigDto, TicketingConfigDto},
    server::util::snowflake::from_db,
};

/// Default channel name prefix for open tickets.
pub const DEFAULT_OPEN_PREFIX: &str = "ticket";
/// Default channel name prefix for closed tickets.
pub const DEFAULT_CLOSED_PREFIX: &str = "closed";

/// A guild the bot has joined.
#[derive(Debug, Clone, PartialEq)]
pub struct Guild {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    /// `#RRGGBB` colour used for the bot's embeds in this guild.
    pub embed_color: Option<String>,
    /// Default channel for reminders.
    pub reminder_channel_id: Option<u64>,
    /// Set when the bot leaves the guild.
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Guild {
    pub fn from_entity(entity: entity::guild::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            name: entity.name,
            embed_color: entity.embed_color,
            reminder_channel_id: entity.reminder_channel_id.map(from_db),
            is_disabled: entity.is_disabled,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModerationConfig {
    pub guild_id: u64,
    pub mute_role_id: Option<u64>,
    pub moderation_log_channel_id: Option<u64>,
    pub member_events_log_channel_id: Option<u64>,
    pub message_log_channel_id: Option<u64>,
    pub is_disabled: bool,
}

impl ModerationConfig {
    pub fn from_entity(entity: entity::moderation_config::Model) -> Self {
        Self {
            guild_id: from_db(entity.guild_id),
            mute_role_id: entity.mute_role_id.map(from_db),
            moderation_log_channel_id: entity.moderation_log_channel_id.map(from_db),
            member_events_log_channel_id: entity.member_events_log_channel_id.map(from_db),
            message_log_channel_id: entity.message_log_channel_id.map(from_db),
            is_disabled: entity.is_disabled,
        }
    }

    /// Moderation log channel, unless moderation is disabled.
    pub fn log_channel(&self) -> Option<u64> {
        if self.is_disabled {
            return None;
        }
        self.moderation_log_channel_id
    }

    /// Member events log channel, unless moderation is disabled.
    pub fn member_events_channel(&self) -> Option<u64> {
        if self.is_disabled {
            return None;
        }
        self.member_events_log_channel_id
    }

    /// Message log channel, unless moderation is disabled.
    pub fn message_log_channel(&self) -> Option<u64> {
        if self.is_disabled {
            return None;
        }
        self.message_log_channel_id
    }

    pub fn into_dto(self) -> ModerationConfigDto {
        ModerationConfigDto {
            mute_role_id: self.mute_role_id,
            moderation_log_channel_id: self.moderation_log_channel_id,
            member_events_log_channel_id: self.member_events_log_channel_id,
            message_log_channel_id: self.message_log_channel_id,
            is_disabled: self.is_disabled,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketingConfig {
    pub guild_id: u64,
    pub open_category_id: Option<u64>,
    pub closed_category_id: Option<u64>,
    pub log_channel_id: Option<u64>,
    /// Number of the most recently opened ticket.
    pub last_ticket_id: i64,
    pub open_name_prefix: String,
    pub closed_name_prefix: String,
    pub welcome_message: Option<String>,
    /// Open tickets without activity for this long are closed.
    pub close_after: Option<Duration>,
    /// Closed tickets are deleted this long after closing.
    pub clean_after: Option<Duration>,
    pub center_embed_config_id: Option<i32>,
    pub is_disabled: bool,
}

impl TicketingConfig {
    pub fn from_entity(entity: entity::ticketing_config::Model) -> Self {
        Self {
            guild_id: from_db(entity.guild_id),
            open_category_id: entity.open_category_id.map(from_db),
            closed_category_id: entity.closed_category_id.map(from_db),
            log_channel_id: entity.log_channel_id.map(from_db),
            last_ticket_id: entity.last_ticket_id,
            open_name_prefix: entity.open_name_prefix,
            closed_name_prefix: entity.closed_name_prefix,
            welcome_message: entity.welcome_message,
            close_after: entity.close_after_seconds.and_then(Duration::try_seconds),
            clean_after: entity.clean_after_seconds.and_then(Duration::try_seconds),
            center_embed_config_id: entity.center_embed_config_id,
            is_disabled: entity.is_disabled,
        }
    }

    /// Tickets can be opened: enabled and both categories set.
    pub fn is_usable(&self) -> bool {
        !self.is_disabled && self.open_category_id.is_some() && self.closed_category_id.is_some()
    }

    pub fn into_dto(self) -> TicketingConfigDto {
        TicketingConfigDto {
            open_category_id: self.open_category_id,
            closed_category_id: self.closed_category_id,
            log_channel_id: self.log_channel_id,
            last_ticket_id: self.last_ticket_id,
            open_name_prefix: self.open_name_prefix,
            closed_name_prefix: self.closed_name_prefix,
            welcome_message: self.welcome_message,
            close_after_seconds: self.close_after.map(|d| d.num_seconds()),
            clean_after_seconds: self.clean_after.map(|d| d.num_seconds()),
            is_disabled: self.is_disabled,
        }
    }
}

/// Guild with both configurations, as shown by `/config show` and the API.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildWithConfigs {
    pub guild: Guild,
    pub moderation: Option<ModerationConfig>,
    pub ticketing: Option<TicketingConfig>,
}

impl GuildWithConfigs {
    pub fn into_dto(self) -> GuildDto {
        GuildDto {
            guild_id: self.guild.guild_id,
            name: self.guild.name,
            embed_color: self.guild.embed_color,
            reminder_channel_id: self.guild.reminder_channel_id,
            moderation: self.moderation.map(ModerationConfig::into_dto),
            ticketing: self.ticketing.map(TicketingConfig::into_dto),
        }
    }
}

/// Changes to a guild's moderation configuration.
///
/// `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpsertModerationConfigParams {
    pub guild_id: u64,
    pub mute_role_id: Option<u64>,
    pub moderation_log_channel_id: Option<u64>,
    pub member_events_log_channel_id: Option<u64>,
    pub message_log_channel_id: Option<u64>,
    pub is_disabled: Option<bool>,
}

/// Changes to a guild's ticketing configuration.
///
/// `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpsertTicketingConfigParams {
    pub guild_id: u64,
    pub open_category_id: Option<u64>,
    pub closed_category_id: Option<u64>,
    pub log_channel_id: Option<u64>,
    pub open_name_prefix: Option<String>,
    pub closed_name_prefix: Option<String>,
    pub welcome_message: Option<String>,
    pub close_after: Option<Duration>,
    pub clean_after: Option<Duration>,
    pub center_embed_config_id: Option<i32>,
    pub is_disabled: Option<bool>,
}
