//! Moderation config factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for a guild's moderation configuration.
///
/// All channels and the mute role default to `None`.
pub struct ModerationConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    mute_role_id: Option<i64>,
    moderation_log_channel_id: Option<i64>,
    member_events_log_channel_id: Option<i64>,
    is_disabled: bool,
}

impl<'a> ModerationConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            mute_role_id: None,
            moderation_log_channel_id: None,
            member_events_log_channel_id: None,
            is_disabled: false,
        }
    }

    pub fn mute_role_id(mut self, mute_role_id: Option<i64>) -> Self {
        self.mute_role_id = mute_role_id;
        self
    }

    pub fn moderation_log_channel_id(mut self, channel_id: Option<i64>) -> Self {
        self.moderation_log_channel_id = channel_id;
        self
    }

    pub fn member_events_log_channel_id(mut self, channel_id: Option<i64>) -> Self {
        self.member_events_log_channel_id = channel_id;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::moderation_config::Model, DbErr> {
        let now = Utc::now();
        entity::moderation_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            mute_role_id: ActiveValue::Set(self.mute_role_id),
            moderation_log_channel_id: ActiveValue::Set(self.moderation_log_channel_id),
            member_events_log_channel_id: ActiveValue::Set(self.member_events_log_channel_id),
            message_log_channel_id: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
