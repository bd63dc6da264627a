use chrono::{Duration, Utc};
use sea_orm::DatabaseConnection;
use serenity::{
    all::{ChannelId, GetMessages, MessageId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::prune::PruneRepository,
    error::AppError,
    model::{
        audit_log::AuditAction,
        prune::{
            select_prunable, CreatePruneParams, Prune, PruneCandidate, PruneFilter, PruneParams,
            BULK_DELETE_MAX_AGE_DAYS, MAX_PRUNE_COUNT,
        },
    },
    service::{
        audit_log::AuditLogService, embed::ModerationActionEnricher,
        moderation_log::ModerationLogService,
    },
    util::{queue::TaskQueue, time::from_discord_timestamp},
};

/// Messages per history request, Discord's maximum.
const HISTORY_PAGE_SIZE: u8 = 100;
/// History pages scanned before giving up on finding `count` matching messages.
const MAX_HISTORY_PAGES: usize = 10;

pub struct PruneService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
    task_queue: TaskQueue,
}

impl<'a> PruneService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, task_queue: TaskQueue) -> Self {
        Self {
            db,
            http,
            task_queue,
        }
    }

    /// Deletes up to `count` recent messages from a channel.
    ///
    /// Runs in the task queue. Only messages younger than 14 days are considered since Discord
    /// refuses to bulk delete older ones.
    ///
    /// # Returns
    /// - `Ok(Prune)` - The stored record; `deleted_count` is what was actually deleted
    /// - `Err(AppError::BadRequest)` - `count` outside 1..=99
    /// - `Err(AppError::DiscordErr)` - Reading history or deleting failed
    pub async fn prune(&self, params: PruneParams) -> Result<Prune, AppError> {
        let count = params.filter.count;
        if count == 0 || count > MAX_PRUNE_COUNT {
            return Err(AppError::BadRequest(format!(
                "Can prune between 1 and {} messages",
                MAX_PRUNE_COUNT
            )));
        }

        self.task_queue.run(self.run_prune(params)).await
    }

    async fn run_prune(&self, params: PruneParams) -> Result<Prune, AppError> {
        let channel = ChannelId::new(params.channel_id);
        let ids = self.collect(channel, &params.filter).await?;

        match ids.as_slice() {
            [] => {}
            [id] => channel.delete_message(&self.http, MessageId::new(*id)).await?,
            ids => {
                let ids: Vec<MessageId> = ids.iter().copied().map(MessageId::new).collect();
                channel.delete_messages(&self.http, &ids).await?
            }
        }

        tracing::info!(
            "Pruned {} of {} requested messages in channel {}",
            ids.len(),
            params.filter.count,
            params.channel_id
        );

        let prune = PruneRepository::new(self.db)
            .create(CreatePruneParams {
                guild_id: params.guild_id,
                channel_id: params.channel_id,
                moderator_id: params.moderator_id,
                target_user_id: params.filter.target_user_id,
                requested_count: params.filter.count as i32,
                deleted_count: ids.len() as i32,
            })
            .await?;

        let details = format!("{} messages in <#{}>", prune.deleted_count, prune.channel_id);
        AuditLogService::new(self.db)
            .record(
                params.guild_id,
                params.moderator_id,
                params.filter.target_user_id,
                AuditAction::Prune,
                Some(details.clone()),
            )
            .await?;
        ModerationLogService::new(self.db, self.http.clone())
            .log_action(
                params.guild_id,
                ModerationActionEnricher {
                    action: "Messages pruned",
                    target_id: params.filter.target_user_id,
                    moderator_id: params.moderator_id,
                    reason: Some(&details),
                    until: None,
                },
            )
            .await?;

        Ok(prune)
    }

    /// Walks channel history newest first until `filter.count` messages are selected or no
    /// older message could qualify.
    async fn collect(&self, channel: ChannelId, filter: &PruneFilter) -> Result<Vec<u64>, AppError> {
        let now = Utc::now();
        let oldest_allowed = now - Duration::days(BULK_DELETE_MAX_AGE_DAYS);
        let mut selected: Vec<u64> = Vec::new();
        let mut before: Option<MessageId> = None;

        for _ in 0..MAX_HISTORY_PAGES {
            let mut request = GetMessages::new().limit(HISTORY_PAGE_SIZE);
            if let Some(before) = before {
                request = request.before(before);
            }
            let messages = channel.messages(&self.http, request).await?;
            let candidates: Vec<PruneCandidate> = messages
                .iter()
                .map(|m| PruneCandidate {
                    id: m.id.get(),
                    author_id: m.author.id.get(),
                    created_at: from_discord_timestamp(m.timestamp),
                })
                .collect();
            let Some(oldest) = candidates.last() else {
                break;
            };

            let remaining = PruneFilter {
                count: filter.count - selected.len() as u8,
                ..filter.clone()
            };
            selected.extend(select_prunable(&candidates, &remaining, now));

            let exhausted = candidates.len() < HISTORY_PAGE_SIZE as usize
                || oldest.created_at <= oldest_allowed
                || filter.since_message_id.is_some_and(|since| oldest.id <= since);
            if selected.len() >= filter.count as usize || exhausted {
                break;
            }
            before = Some(MessageId::new(oldest.id));
        }

        Ok(selected)
    }
}
