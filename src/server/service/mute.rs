use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::{
    all::{GuildId, RoleId, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{moderation_config::ModerationConfigRepository, mute::MuteRepository},
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

/// Mutes by mute role, with create-or-extend semantics.
pub struct MuteService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> MuteService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Mutes a user, or extends their active mute when the new end is later.
    ///
    /// The mute role is added on Discord in every case. Only a created or extended mute is
    /// written to the audit log and the moderation log channel.
    ///
    /// # Returns
    /// - `Ok(ApplyResult)` - The stored mute and whether it was created, extended or left as is
    /// - `Err(ModerationError::DurationInPast)` - `applied_until` is not in the future
    /// - `Err(ModerationError::MuteRoleNotConfigured)` - The guild has no mute role
    /// - `Err(AppError::DiscordErr)` - Adding the role failed; nothing is stored
    pub async fn mute(&self, params: ApplyPunishmentParams) -> Result<ApplyResult, AppError> {
        if params.applied_until.is_some_and(|until| until <= Utc::now()) {
            return Err(ModerationError::DurationInPast.into());
        }
        let mute_role_id = self.mute_role(params.guild_id).await?;

        self.http
            .add_member_role(
                GuildId::new(params.guild_id),
                UserId::new(params.user_id),
                RoleId::new(mute_role_id),
                params.reason.as_deref(),
            )
            .await?;

        let result = MuteRepository::new(self.db)
            .apply(params.clone())
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, "Member was muted concurrently"))?;
        if result.outcome == ApplyOutcome::AlreadyLonger {
            return Ok(result);
        }

        tracing::info!(
            "Muted {} in guild {} until {:?} ({})",
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
                AuditAction::Mute,
                params.reason.clone(),
            )
            .await?;
        ModerationLogService::new(self.db, self.http.clone())
            .log_action(
                params.guild_id,
                ModerationActionEnricher {
                    action: match result.outcome {
                        ApplyOutcome::Extended => "Mute extended",
                        _ => "Muted",
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

    /// Lifts a user's active mute and removes the mute role.
    ///
    /// # Returns
    /// - `Ok(Punishment)` - The lifted mute
    /// - `Err(ModerationError::NotMuted)` - The user has no active mute
    pub async fn unmute(&self, params: LiftPunishmentParams) -> Result<Punishment, AppError> {
        let guild_id = params.guild_id;
        let user_id = params.user_id;
        let lifted_by_id = params.lifted_by_id;
        let reason = params.reason.clone();

        let mute = MuteRepository::new(self.db)
            .lift(params)
            .await?
            .ok_or(ModerationError::NotMuted(user_id))?;

        // The role may have been removed by hand, or the member may have left.
        if let Some(role_id) = self.configured_mute_role(guild_id).await? {
            if let Err(e) = self
                .http
                .remove_member_role(
                    GuildId::new(guild_id),
                    UserId::new(user_id),
                    RoleId::new(role_id),
                    reason.as_deref(),
                )
                .await
            {
                tracing::warn!(
                    "Failed to remove mute role from {} in guild {}: {}",
                    user_id,
                    guild_id,
                    e
                );
            }
        }

        tracing::info!("Unmuted {} in guild {}", user_id, guild_id);

        AuditLogService::new(self.db)
            .record(
                guild_id,
                lifted_by_id,
                Some(user_id),
                AuditAction::Unmute,
                reason.clone(),
            )
            .await?;
        ModerationLogService::new(self.db, self.http.clone())
            .log_action(
                guild_id,
                ModerationActionEnricher {
                    action: "Unmuted",
                    target_id: Some(user_id),
                    moderator_id: lifted_by_id,
                    reason: reason.as_deref(),
                    until: None,
                },
            )
            .await?;

        Ok(mute)
    }

    pub async fn get_active(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<Punishment>, AppError> {
        Ok(MuteRepository::new(self.db)
            .get_active(guild_id, user_id)
            .await?)
    }

    pub async fn list_active(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Punishment>, AppError> {
        Ok(MuteRepository::new(self.db)
            .get_active_paginated(guild_id, page, per_page)
            .await?)
    }

    /// Lifts every mute that has run out, on behalf of the bot.
    ///
    /// A failure for one mute is logged and does not stop the others.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of mutes lifted
    /// - `Err(AppError::DbErr)` - Loading the expired mutes failed
    pub async fn lift_expired(&self, now: DateTime<Utc>, bot_id: u64) -> Result<usize, AppError> {
        let expired = MuteRepository::new(self.db).get_expired(now).await?;
        let mut lifted = 0;

        for mute in expired {
            let params = LiftPunishmentParams {
                guild_id: mute.guild_id,
                user_id: mute.user_id,
                lifted_by_id: bot_id,
                reason: Some("Mute expired".to_string()),
            };
            match self.unmute(params).await {
                Ok(_) => lifted += 1,
                Err(e) => tracing::error!(
                    "Failed to lift expired mute {} in guild {}: {}",
                    mute.id,
                    mute.guild_id,
                    e
                ),
            }
        }

        Ok(lifted)
    }

    /// Re-adds the mute role to a member who rejoined while muted.
    ///
    /// # Returns
    /// - `Ok(true)` - The member has an active mute and the role was added
    /// - `Ok(false)` - Not muted, or no mute role configured
    pub async fn reapply(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        if MuteRepository::new(self.db)
            .get_active(guild_id, user_id)
            .await?
            .is_none()
        {
            return Ok(false);
        }
        let Some(role_id) = self.configured_mute_role(guild_id).await? else {
            return Ok(false);
        };

        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some("Rejoined while muted"),
            )
            .await?;

        tracing::info!("Re-applied mute to {} in guild {}", user_id, guild_id);

        Ok(true)
    }

    async fn mute_role(&self, guild_id: u64) -> Result<u64, AppError> {
        self.configured_mute_role(guild_id)
            .await?
            .ok_or_else(|| ModerationError::MuteRoleNotConfigured.into())
    }

    async fn configured_mute_role(&self, guild_id: u64) -> Result<Option<u64>, AppError> {
        let config = ModerationConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?;

        Ok(config.and_then(|c| c.mute_role_id))
    }
}
