use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel};

use crate::server::{
    model::embed::{EmbedConfig, EmbedConfigParams},
    util::snowflake::to_db,
};

pub struct EmbedConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmbedConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: EmbedConfigParams) -> Result<EmbedConfig, DbErr> {
        let now = Utc::now();
        let model = entity::embed_config::ActiveModel {
            guild_id: ActiveValue::Set(to_db(params.guild_id)),
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            color: ActiveValue::Set(params.color),
            author: ActiveValue::Set(params.author),
            footer: ActiveValue::Set(params.footer),
            image_url: ActiveValue::Set(params.image_url),
            thumbnail_url: ActiveValue::Set(params.thumbnail_url),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EmbedConfig::from_entity(model))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<EmbedConfig>, DbErr> {
        let model = entity::prelude::EmbedConfig::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(model.map(EmbedConfig::from_entity))
    }

    /// Replaces every field of the embed config.
    ///
    /// # Returns
    /// - `Ok(Some(EmbedConfig))`: Updated config
    /// - `Ok(None)`: No config with `id`
    /// - `Err(DbErr)`: Database error
    pub async fn update(
        &self,
        id: i32,
        params: EmbedConfigParams,
    ) -> Result<Option<EmbedConfig>, DbErr> {
        let Some(model) = entity::prelude::EmbedConfig::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.title = ActiveValue::Set(params.title);
        active.description = ActiveValue::Set(params.description);
        active.color = ActiveValue::Set(params.color);
        active.author = ActiveValue::Set(params.author);
        active.footer = ActiveValue::Set(params.footer);
        active.image_url = ActiveValue::Set(params.image_url);
        active.thumbnail_url = ActiveValue::Set(params.thumbnail_url);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(EmbedConfig::from_entity(active.update(self.db).await?)))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::EmbedConfig::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
