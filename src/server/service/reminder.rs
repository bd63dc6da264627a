use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage, UserId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{guild::GuildRepository, reminder::ReminderRepository},
    error::AppError,
    model::reminder::{next_occurrence, Reminder, ReminderSchedule, SetReminderParams},
    service::embed::{ReminderEnricher, ResponseEmbed},
};

pub struct ReminderService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> ReminderService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Creates a one-shot or recurring reminder.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The stored reminder; `set_for` is its first fire time
    /// - `Err(AppError::BadRequest)` - A one-shot time not in the future, or an invalid cron
    ///   expression
    pub async fn set(&self, params: SetReminderParams) -> Result<Reminder, AppError> {
        let now = Utc::now();
        let text = params.text.trim().to_string();
        if text.is_empty() {
            return Err(AppError::BadRequest("Reminder text cannot be empty".to_string()));
        }

        let (set_for, cron_expression) = match params.schedule {
            ReminderSchedule::Once(at) if at <= now => {
                return Err(AppError::BadRequest(
                    "Reminders must be set for the future".to_string(),
                ))
            }
            ReminderSchedule::Once(at) => (at, None),
            ReminderSchedule::Recurring(expression) => {
                let expression = expression.trim().to_string();
                (next_occurrence(&expression, now)?, Some(expression))
            }
        };

        let guild_default = match params.channel_id {
            Some(_) => None,
            None => GuildRepository::new(self.db)
                .find_by_guild_id(params.guild_id)
                .await?
                .and_then(|guild| guild.reminder_channel_id),
        };
        let channel_id = params
            .channel_id
            .or(guild_default)
            .unwrap_or(params.invoking_channel_id);

        let reminder = ReminderRepository::new(self.db)
            .create(
                params.guild_id,
                channel_id,
                params.creator_id,
                text,
                set_for,
                cron_expression,
            )
            .await?;

        tracing::debug!(
            "Reminder {} set by {} for {}",
            reminder.id,
            reminder.creator_id,
            reminder.set_for
        );

        Ok(reminder)
    }

    /// Active reminders the user created in the guild, soonest first.
    pub async fn list(&self, guild_id: u64, user_id: u64) -> Result<Vec<Reminder>, AppError> {
        Ok(ReminderRepository::new(self.db)
            .get_active_by_creator(guild_id, user_id)
            .await?)
    }

    /// Cancels a reminder. Only its creator may cancel it.
    ///
    /// # Returns
    /// - `Ok(Reminder)` - The cancelled reminder
    /// - `Err(AppError::NotFound)` - No active reminder with that id created by the user in
    ///   this guild
    pub async fn cancel(&self, id: i32, guild_id: u64, user_id: u64) -> Result<Reminder, AppError> {
        let repo = ReminderRepository::new(self.db);
        let not_found = || AppError::NotFound(format!("You have no reminder #{}", id));

        let reminder = repo
            .get_by_id(id)
            .await?
            .filter(|r| !r.is_disabled && r.guild_id == guild_id && r.creator_id == user_id)
            .ok_or_else(not_found)?;

        repo.disable(reminder.id).await?.ok_or_else(not_found)
    }

    /// Posts every due reminder, then disables one-shots and advances recurring ones.
    ///
    /// A reminder whose post fails is still advanced so a deleted channel does not make it
    /// fire every minute.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of reminders posted
    /// - `Err(AppError::DbErr)` - Loading due reminders failed
    pub async fn dispatch_due(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let repo = ReminderRepository::new(self.db);
        let due = repo.get_due(now).await?;
        let mut posted = 0;

        for reminder in due {
            match self.post(&reminder).await {
                Ok(()) => posted += 1,
                Err(e) => tracing::error!(
                    "Failed to post reminder {} to channel {}: {}",
                    reminder.id,
                    reminder.channel_id,
                    e
                ),
            }

            let next = reminder
                .cron_expression
                .as_deref()
                .map(|expression| next_occurrence(expression, now));
            match next {
                Some(Ok(set_for)) => {
                    repo.reschedule(reminder.id, set_for).await?;
                }
                Some(Err(e)) => {
                    tracing::warn!("Disabling reminder {}: {}", reminder.id, e);
                    repo.disable(reminder.id).await?;
                }
                None => {
                    repo.disable(reminder.id).await?;
                }
            }
        }

        Ok(posted)
    }

    async fn post(&self, reminder: &Reminder) -> Result<(), AppError> {
        let guild = GuildRepository::new(self.db)
            .find_by_guild_id(reminder.guild_id)
            .await?;
        let embed = ResponseEmbed::for_guild(guild.as_ref())
            .enrich(&ReminderEnricher(reminder))
            .build();

        ChannelId::new(reminder.channel_id)
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(format!("<@{}>", reminder.creator_id))
                    .embed(embed)
                    .allowed_mentions(
                        CreateAllowedMentions::new().users(vec![UserId::new(reminder.creator_id)]),
                    ),
            )
            .await?;

        Ok(())
    }
}
