use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A mute or ban record.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PunishmentDto {
    pub id: i32,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub applied_by_id: u64,
    /// `None` for indefinite punishments.
    pub applied_until: Option<DateTime<Utc>>,
    pub reason: Option<String>,
    #[serde(with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub lifted_by_id: Option<u64>,
    pub lifted_on: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PaginatedPunishmentsDto {
    pub entries: Vec<PunishmentDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Result of a mute or ban request.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ApplyPunishmentResultDto {
    /// `created`, `extended` or `already_longer`.
    pub outcome: String,
    pub punishment: PunishmentDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateMuteDto {
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    /// e.g. `30m`, `1h 30m`, `perm`.
    pub duration: String,
    pub reason: Option<String>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateBanDto {
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub user_id: u64,
    pub duration: String,
    pub reason: Option<String>,
    /// Days of message history to delete, 0 to 7.
    #[serde(default)]
    pub delete_message_days: u8,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreatePruneDto {
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
    /// Number of messages to delete, 1 to 99.
    pub count: u8,
    #[serde(default, with = "crate::model::serde_id::option_string")]
    #[schema(value_type = Option<String>)]
    pub target_user_id: Option<u64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PruneDto {
    pub id: i32,
    #[serde(with = "crate::model::serde_id::string")]
    #[schema(value_type = String)]
    pub channel_id: u64,
    pub requested_count: i32,
    pub deleted_count: i32,
    pub created_at: DateTime<Utc>,
}
