use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ModerationConfigDto {
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub mute_role_id: Option<u64>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub moderation_log_channel_id: Option<u64>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub member_events_log_channel_id: Option<u64>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub message_log_channel_id: Option<u64>,
    pub is_disabled: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct TicketingConfigDto {
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub open_category_id: Option<u64>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub closed_category_id: Option<u64>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub log_channel_id: Option<u64>,
    pub last_ticket_id: i64,
    pub open_name_prefix: String,
    pub closed_name_prefix: String,
    pub welcome_message: Option<String>,
    /// Inactivity in seconds after which open tickets are closed.
    pub close_after_seconds: Option<i64>,
    /// Seconds after closing at which tickets are deleted.
    pub clean_after_seconds: Option<i64>,
    pub is_disabled: bool,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct GuildDto {
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub guild_id: u64,
    pub name: String,
    pub embed_color: Option<String>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub reminder_channel_id: Option<u64>,
    pub moderation: Option<ModerationConfigDto>,
    pub ticketing: Option<TicketingConfigDto>,
}
