//! Embed config factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating stored embed configurations.
pub struct EmbedConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    title: Option<String>,
    description: Option<String>,
    color: Option<String>,
}

impl<'a> EmbedConfigFactory<'a> {
    /// Defaults to a titled embed with a short description and no colour.
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            title: Some("Test embed".to_string()),
            description: Some("Test embed description".to_string()),
            color: None,
        }
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn color(mut self, color: Option<String>) -> Self {
        self.color = color;
        self
    }

    pub async fn build(self) -> Result<entity::embed_config::Model, DbErr> {
        let now = Utc::now();
        entity::embed_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            color: ActiveValue::Set(self.color),
            author: ActiveValue::Set(None),
            footer: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            thumbnail_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_embed_config(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::embed_config::Model, DbErr> {
    EmbedConfigFactory::new(db, guild_id).build().await
}
