use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

use crate::server::{
    model::guild::Guild,
    util::snowflake::to_db,
};

pub struct GuildRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts the guild or refreshes its name, re-enabling a guild the bot had left.
    ///
    /// # Returns
    /// - `Ok(Guild)`: The stored guild
    /// - `Err(DbErr)`: Database error
    pub async fn upsert(&self, guild_id: u64, name: String) -> Result<Guild, DbErr> {
        let now = Utc::now();
        let model = entity::prelude::Guild::insert(entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(to_db(guild_id)),
            name: ActiveValue::Set(name),
            is_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::guild::Column::GuildId)
                .update_columns([
                    entity::guild::Column::Name,
                    entity::guild::Column::IsDisabled,
                    entity::guild::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Guild::from_entity(model))
    }

    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<Guild>, DbErr> {
        let model = entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(to_db(guild_id)))
            .one(self.db)
            .await?;

        Ok(model.map(Guild::from_entity))
    }

    /// Sets `is_disabled`; returns `Ok(None)` when the guild is unknown.
    pub async fn set_disabled(
        &self,
        guild_id: u64,
        is_disabled: bool,
    ) -> Result<Option<Guild>, DbErr> {
        self.update(guild_id, |guild| {
            guild.is_disabled = ActiveValue::Set(is_disabled);
        })
        .await
    }

    pub async fn set_embed_color(
        &self,
        guild_id: u64,
        embed_color: Option<String>,
    ) -> Result<Option<Guild>, DbErr> {
        self.update(guild_id, |guild| {
            guild.embed_color = ActiveValue::Set(embed_color);
        })
        .await
    }

    pub async fn set_reminder_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<Option<Guild>, DbErr> {
        self.update(guild_id, |guild| {
            guild.reminder_channel_id = ActiveValue::Set(channel_id.map(to_db));
        })
        .await
    }

    async fn update(
        &self,
        guild_id: u64,
        apply: impl FnOnce(&mut entity::guild::ActiveModel),
    ) -> Result<Option<Guild>, DbErr> {
        let Some(model) = entity::prelude::Guild::find()
            .filter(entity::guild::Column::GuildId.eq(to_db(guild_id)))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        apply(&mut active);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Guild::from_entity(active.update(self.db).await?)))
    }
}
