//! Tag factory.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct TagFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    name: String,
    text: String,
    embed_config_id: Option<i32>,
    is_disabled: bool,
}

impl<'a> TagFactory<'a> {
    /// Defaults to a plain-text tag named `tag-{id}`.
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            name: format!("tag-{}", next_id()),
            text: "Test tag text".to_string(),
            embed_config_id: None,
            is_disabled: false,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn embed_config_id(mut self, embed_config_id: Option<i32>) -> Self {
        self.embed_config_id = embed_config_id;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::tag::Model, DbErr> {
        let now = Utc::now();
        entity::tag::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            text: ActiveValue::Set(self.text),
            embed_config_id: ActiveValue::Set(self.embed_config_id),
            creator_id: ActiveValue::Set(next_snowflake()),
            last_edited_by_id: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_tag(
    db: &DatabaseConnection,
    guild_id: i64,
    name: &str,
) -> Result<entity::tag::Model, DbErr> {
    TagFactory::new(db, guild_id).name(name).build().await
}
