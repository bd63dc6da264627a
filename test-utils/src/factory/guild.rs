//! Guild factory for creating test guild entities.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test guilds with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let guild = GuildFactory::new(&db)
///     .guild_id(987654321)
///     .name("CustomGuild")
///     .build()
///     .await?;
/// ```
pub struct GuildFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    name: String,
    embed_color: Option<String>,
    reminder_channel_id: Option<i64>,
    is_disabled: bool,
}

impl<'a> GuildFactory<'a> {
    /// Creates a new GuildFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: unique snowflake
    /// - name: `"Guild {id}"`
    /// - embed_color, reminder_channel_id: `None`
    /// - is_disabled: `false`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_snowflake(),
            name: format!("Guild {}", next_id()),
            embed_color: None,
            reminder_channel_id: None,
            is_disabled: false,
        }
    }

    pub fn guild_id(mut self, guild_id: i64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn embed_color(mut self, embed_color: Option<String>) -> Self {
        self.embed_color = embed_color;
        self
    }

    pub fn reminder_channel_id(mut self, reminder_channel_id: Option<i64>) -> Self {
        self.reminder_channel_id = reminder_channel_id;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    /// Builds and inserts the guild entity into the database.
    pub async fn build(self) -> Result<entity::guild::Model, DbErr> {
        let now = Utc::now();
        entity::guild::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            name: ActiveValue::Set(self.name),
            embed_color: ActiveValue::Set(self.embed_color),
            reminder_channel_id: ActiveValue::Set(self.reminder_channel_id),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a guild with default values.
pub async fn create_guild(db: &DatabaseConnection) -> Result<entity::guild::Model, DbErr> {
    GuildFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_guild_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Guild).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild = create_guild(db).await?;

        assert!(guild.guild_id > 0);
        assert!(!guild.name.is_empty());
        assert!(!guild.is_disabled);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_guilds() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Guild).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let guild1 = create_guild(db).await?;
        let guild2 = create_guild(db).await?;

        assert_ne!(guild1.guild_id, guild2.guild_id);
        assert_ne!(guild1.name, guild2.name);

        Ok(())
    }
}
