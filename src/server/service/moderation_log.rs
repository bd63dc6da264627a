//! Posting embeds to a guild's log channels.

use serenity::{
    all::{ChannelId, CreateEmbed, CreateMessage},
    http::Http,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    data::{guild::GuildRepository, moderation_config::ModerationConfigRepository},
    error::AppError,
    service::embed::{ModerationActionEnricher, ResponseEmbed},
};

pub struct ModerationLogService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> ModerationLogService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Starts an embed in the guild's colour.
    pub async fn embed(&self, guild_id: u64) -> Result<ResponseEmbed, AppError> {
        let guild = GuildRepository::new(self.db).find_by_guild_id(guild_id).await?;

        Ok(ResponseEmbed::for_guild(guild.as_ref()))
    }

    /// Posts a moderation action to the moderation log channel, if one is configured.
    ///
    /// Failing to post is logged, not returned, so the action itself still succeeds.
    ///
    /// # Returns
    /// - `Ok(())` - Posted, or no log channel configured
    /// - `Err(AppError::DbErr)` - Reading the guild or its configuration failed
    pub async fn log_action(
        &self,
        guild_id: u64,
        action: ModerationActionEnricher<'_>,
    ) -> Result<(), AppError> {
        let config = ModerationConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;
        let Some(channel_id) = config.and_then(|c| c.log_channel()) else {
            return Ok(());
        };

        let embed = self.embed(guild_id).await?.enrich(&action).build();
        self.send(channel_id, embed).await;

        Ok(())
    }

    /// Posts an embed to the member events log channel, if one is configured.
    pub async fn log_member_event(&self, guild_id: u64, embed: CreateEmbed) -> Result<(), AppError> {
        let config = ModerationConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;
        let Some(channel_id) = config.and_then(|c| c.member_events_channel()) else {
            return Ok(());
        };

        self.send(channel_id, embed).await;

        Ok(())
    }

    /// Posts an embed about a removed message to the message log channel, if one is configured.
    pub async fn log_message_event(&self, guild_id: u64, embed: CreateEmbed) -> Result<(), AppError> {
        let config = ModerationConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;
        let Some(channel_id) = config.and_then(|c| c.message_log_channel()) else {
            return Ok(());
        };

        self.send(channel_id, embed).await;

        Ok(())
    }

    async fn send(&self, channel_id: u64, embed: CreateEmbed) {
        let message = CreateMessage::new().embed(embed);
        if let Err(e) = ChannelId::new(channel_id)
            .send_message(&self.http, message)
            .await
        {
            tracing::warn!("Failed to post to log channel {}: {}", channel_id, e);
        }
    }
}
