//! Stored embed layouts used by tags, role menus and the ticket center.

use crate::server::util::snowflake::from_db;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmbedConfig {
    pub id: i32,
    pub guild_id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `#RRGGBB`; falls back to the guild colour.
    pub color: Option<String>,
    pub author: Option<String>,
    pub footer: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
}

impl EmbedConfig {
    pub fn from_entity(entity: entity::embed_config::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            title: entity.title,
            description: entity.description,
            color: entity.color,
            author: entity.author,
            footer: entity.footer,
            image_url: entity.image_url,
            thumbnail_url: entity.thumbnail_url,
        }
    }
}

/// Fields of an embed config to create or replace.
#[derive(Debug, Clone, Default)]
pub struct EmbedConfigParams {
    pub guild_id: u64,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub author: Option<String>,
    pub footer: Option<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
}
