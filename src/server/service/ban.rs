use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::{all::GuildId, http::Http};
use std::sync::Arc;

use crate::server::{
    data::ban::BanRepository,
    error::{moderation::ModerationError, AppError},
    model::{
        audit_log::AuditAction,
        moderation::{
            ApplyOutcome, ApplyPunishmentParams, ApplyResult, LiftPunishmentParams, Punishment,
        },
        Paginated,
    },
    service::{
        audit_log::AuditLogService, embed::ModerationActionEnricher,
        moderation_log::ModerationLogService,
    },
};

/// Discord accepts deleting at most a week of a banned user's messages.
pub const MAX_DELETE_MESSAGE_DAYS: u8 = 7;

pub struct BanService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> BanService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Bans a user, or extends their active ban when the new end is later.
    ///
    /// # Arguments
    /// - `params` - Who, until when and why
    /// - `delete_message_days` - Days of the user's messages Discord deletes, 0 to 7
    ///
    /// # Returns
    /// - `Ok(ApplyResult)` - The stored ban and what happened to it
    /// - `Err(AppError::BadRequest)` - `delete_message_days` above 7
    /// - `Err(ModerationError::DurationInPast)` - `applied_until` is not in the future
    /// - `Err(AppError::DiscordErr)` - Discord refused the ban; nothing is stored
    pub async fn ban(
        &self,
        params: ApplyPunishmentParams,
        delete_message_days: u8,
    ) -> Result<ApplyResult, AppError> {
        if delete_message_days > MAX_DELETE_MESSAGE_DAYS {
            return Err(AppError::BadRequest(format!(
                "Can delete at most {} days of messages",
                MAX_DELETE_MESSAGE_DAYS
            )));
        }
        if params.applied_until.is_some_and(|until| until <= Utc::now()) {
            return Err(ModerationError::DurationInPast.into());
        }

        let guild = GuildId::new(params.guild_id);
        match params.reason.as_deref() {
            Some(reason) => {
                guild
                    .ban_with_reason(&self.http, params.user_id, delete_message_days, reason)
                    .await?
            }
            None => guild.ban(&self.http, params.user_id, delete_message_days).await?,
        }

        let result = BanRepository::new(self.db)
            .apply(params.clone())
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, "Member was banned concurrently"))?;
        if result.outcome == ApplyOutcome::AlreadyLonger {
            return Ok(result);
        }

        tracing::info!(
            "Banned {} in guild {} until {:?} ({})",
            params.user_id,
            params.guild_id,
            params.applied_until,
            result.outcome.as_str()
        );

        AuditLogService::new(self.db)
            .record(
                params.guild_id,
                params.moderator_id,
                Some(params.user_id),
                AuditAction::Ban,
                params.reason.clone(),
            )
            .await?;
        ModerationLogService::new(self.db, self.http.clone())
            .log_action(
                params.guild_id,
                ModerationActionEnricher {
                    action: match result.outcome {
                        ApplyOutcome::Extended => "Ban extended",
                        _ => "Banned",
                    },
                    target_id: Some(params.user_id),
                    moderator_id: params.moderator_id,
                    reason: params.reason.as_deref(),
                    until: Some(params.applied_until),
                },
            )
            .await?;

        Ok(result)
    }

    /// Lifts a ban on Discord and in the database.
    ///
    /// The Discord unban is attempted even without a stored ban, so bans made by hand in the
    /// Discord client can be lifted too.
    ///
    /// # Returns
    /// - `Ok(Some(Punishment))` - The stored ban was lifted
    /// - `Ok(None)` - Only a Discord-side ban existed and it was lifted
    /// - `Err(ModerationError::NotBanned)` - Neither a stored nor a Discord-side ban existed
    pub async fn unban(&self, params: LiftPunishmentParams) -> Result<Option<Punishment>, AppError> {
        let guild_id = params.guild_id;
        let user_id = params.user_id;
        let lifted_by_id = params.lifted_by_id;
        let reason = params.reason.clone();

        let discord_unban = GuildId::new(guild_id).unban(&self.http, user_id).await;
        let ban = BanRepository::new(self.db).lift(params).await?;

        match (&ban, discord_unban) {
            (None, Err(e)) => {
                tracing::debug!("Discord unban of {} in {} failed: {}", user_id, guild_id, e);
                return Err(ModerationError::NotBanned(user_id).into());
            }
            (Some(_), Err(e)) => {
                tracing::warn!(
                    "Lifted stored ban of {} in guild {} but Discord unban failed: {}",
                    user_id,
                    guild_id,
                    e
                );
            }
            _ => {}
        }

        tracing::info!("Unbanned {} in guild {}", user_id, guild_id);

        AuditLogService::new(self.db)
            .record(
                guild_id,
                lifted_by_id,
                Some(user_id),
                AuditAction::Unban,
                reason.clone(),
            )
            .await?;
        ModerationLogService::new(self.db, self.http.clone())
            .log_action(
                guild_id,
                ModerationActionEnricher {
                    action: "Unbanned",
                    target_id: Some(user_id),
                    moderator_id: lifted_by_id,
                    reason: reason.as_deref(),
                    until: None,
                },
            )
            .await?;

        Ok(ban)
    }

    pub async fn get_active(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Punishment>, AppError> {
        Ok(BanRepository::new(self.db)
            .get_active(guild_id, user_id)
            .await?)
    }

    pub async fn list_active(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Punishment>, AppError> {
        Ok(BanRepository::new(self.db)
            .get_active_paginated(guild_id, page, per_page)
            .await?)
    }

    /// Lifts every ban that has run out, on behalf of the bot.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of bans lifted
    /// - `Err(AppError::DbErr)` - Loading the expired bans failed
    pub async fn lift_expired(&self, now: DateTime<Utc>, bot_id: u64) -> Result<usize, AppError> {
        let expired = BanRepository::new(self.db).get_expired(now).await?;
        let mut lifted = 0;

        for ban in expired {
            let params = LiftPunishmentParams {
                guild_id: ban.guild_id,
                user_id: ban.user_id,
                lifted_by_id: bot_id,
                reason: Some("Ban expired".to_string()),
            };
            match self.unban(params).await {
                Ok(_) => lifted += 1,
                Err(e) => tracing::error!(
                    "Failed to lift expired ban {} in guild {}: {}",
                    ban.id,
                    ban.guild_id,
                    e
                ),
            }
        }

        Ok(lifted)
    }
}
