use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        embed_config::EmbedConfigRepository, guild::GuildRepository,
        moderation_config::ModerationConfigRepository,
        ticketing_config::TicketingConfigRepository,
    },
    error::AppError,
    model::{
        embed::EmbedConfigParams,
        guild::{
            Guild, GuildWithConfigs, ModerationConfig, TicketingConfig,
            UpsertModerationConfigParams, UpsertTicketingConfigParams,
        },
    },
    util::color::parse_hex_color,
};

pub struct GuildService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GuildService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a guild the bot is in, re-enabling it if the bot had left before.
    pub async fn ensure(&self, guild_id: u64, name: String) -> Result<Guild, AppError> {
        let guild = GuildRepository::new(self.db).upsert(guild_id, name).await?;

        tracing::info!("Guild {} ({}) is available", guild.name, guild.guild_id);

        Ok(guild)
    }

    /// Marks a guild as left. Unknown guilds are ignored.
    pub async fn disable(&self, guild_id: u64) -> Result<(), AppError> {
        if GuildRepository::new(self.db)
            .set_disabled(guild_id, true)
            .await?
            .is_some()
        {
            tracing::info!("Left guild {}", guild_id);
        }

        Ok(())
    }

    /// Gets a guild with its moderation and ticketing configurations.
    ///
    /// # Returns
    /// - `Ok(GuildWithConfigs)` - The guild
    /// - `Err(AppError::NotFound)` - The bot does not know the guild
    pub async fn get(&self, guild_id: u64) -> Result<GuildWithConfigs, AppError> {
        let guild = GuildRepository::new(self.db)
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))?;
        let moderation = ModerationConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;
        let ticketing = TicketingConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(GuildWithConfigs {
            guild,
            moderation,
            ticketing,
        })
    }

    /// Sets or clears the guild's embed colour.
    ///
    /// # Returns
    /// - `Ok(Guild)` - Updated guild
    /// - `Err(AppError::BadRequest)` - `color` is not `#RRGGBB`
    /// - `Err(AppError::NotFound)` - Unknown guild
    pub async fn set_embed_color(
        &self,
        guild_id: u64,
        color: Option<String>,
    ) -> Result<Guild, AppError> {
        let color = match color {
            Some(color) => {
                parse_hex_color(&color)?;
                Some(color.to_uppercase())
            }
            None => None,
        };

        GuildRepository::new(self.db)
            .set_embed_color(guild_id, color)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))
    }

    pub async fn set_reminder_channel(
        &self,
        guild_id: u64,
        channel_id: Option<u64>,
    ) -> Result<Guild, AppError> {
        GuildRepository::new(self.db)
            .set_reminder_channel(guild_id, channel_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Guild {} not found", guild_id)))
    }

    pub async fn upsert_moderation_config(
        &self,
        params: UpsertModerationConfigParams,
    ) -> Result<ModerationConfig, AppError> {
        Ok(ModerationConfigRepository::new(self.db)
            .upsert(params)
            .await?)
    }

    /// Updates the ticketing configuration.
    ///
    /// # Returns
    /// - `Ok(TicketingConfig)` - Stored configuration
    /// - `Err(AppError::BadRequest)` - A name prefix is empty or an auto-close/clean delay is
    ///   not positive
    pub async fn upsert_ticketing_config(
        &self,
        params: UpsertTicketingConfigParams,
    ) -> Result<TicketingConfig, AppError> {
        for prefix in [&params.open_name_prefix, &params.closed_name_prefix]
            .into_iter()
            .flatten()
        {
            if prefix.trim().is_empty() {
                return Err(AppError::BadRequest(
                    "Ticket channel prefixes cannot be empty".to_string(),
                ));
            }
        }
        for delay in [params.close_after, params.clean_after].into_iter().flatten() {
            if delay <= chrono::Duration::zero() {
                return Err(AppError::BadRequest(
                    "Ticket auto-close and cleanup delays must be positive".to_string(),
                ));
            }
        }

        Ok(TicketingConfigRepository::new(self.db)
            .upsert(params)
            .await?)
    }

    /// Sets the embed of the "open a ticket" message, replacing any previous one.
    ///
    /// Takes effect the next time the center is posted.
    pub async fn set_ticket_center_embed(
        &self,
        params: EmbedConfigParams,
    ) -> Result<TicketingConfig, AppError> {
        let guild_id = params.guild_id;
        let embed_repo = EmbedConfigRepository::new(self.db);
        let current = TicketingConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?
            .and_then(|config| config.center_embed_config_id);

        let updated = match current {
            Some(id) => embed_repo.update(id, params.clone()).await?,
            None => None,
        };
        let embed_config_id = match updated {
            Some(config) => config.id,
            None => embed_repo.create(params).await?.id,
        };

        self.upsert_ticketing_config(UpsertTicketingConfigParams {
            guild_id,
            center_embed_config_id: Some(embed_config_id),
            ..Default::default()
        })
        .await
    }
}
