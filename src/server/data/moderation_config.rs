use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{
    model::guild::{ModerationConfig, UpsertModerationConfigParams},
    util::snowflake::to_db,
};

pub struct ModerationConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ModerationConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<ModerationConfig>, DbErr> {
        let model = entity::prelude::ModerationConfig::find()
            .filter(entity::moderation_config::Column::GuildId.eq(to_db(guild_id)))
            .one(self.db)
            .await?;

        Ok(model.map(ModerationConfig::from_entity))
    }

    /// Creates the guild's moderation config or updates the fields set in `params`.
    ///
    /// Fields left `None` keep their stored value, or start empty on insert.
    ///
    /// # Returns
    /// - `Ok(ModerationConfig)`: The stored config
    /// - `Err(DbErr)`: Database error, including a missing guild row
    pub async fn upsert(
        &self,
        params: UpsertModerationConfigParams,
    ) -> Result<ModerationConfig, DbErr> {
        let now = Utc::now();
        let existing = entity::prelude::ModerationConfig::find()
            .filter(entity::moderation_config::Column::GuildId.eq(to_db(params.guild_id)))
            .one(self.db)
            .await?;

        let is_new = existing.is_none();
        let mut active = match existing {
            Some(model) => model.into_active_model(),
            None => entity::moderation_config::ActiveModel {
                guild_id: ActiveValue::Set(to_db(params.guild_id)),
                mute_role_id: ActiveValue::Set(None),
                moderation_log_channel_id: ActiveValue::Set(None),
                member_events_log_channel_id: ActiveValue::Set(None),
                message_log_channel_id: ActiveValue::Set(None),
                is_disabled: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            },
        };

        if let Some(id) = params.mute_role_id {
            active.mute_role_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(id) = params.moderation_log_channel_id {
            active.moderation_log_channel_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(id) = params.member_events_log_channel_id {
            active.member_events_log_channel_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(id) = params.message_log_channel_id {
            active.message_log_channel_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(is_disabled) = params.is_disabled {
            active.is_disabled = ActiveValue::Set(is_disabled);
        }
        active.updated_at = ActiveValue::Set(now);

        let model = if is_new {
            active.insert(self.db).await?
        } else {
            active.update(self.db).await?
        };

        Ok(ModerationConfig::from_entity(model))
    }
}
