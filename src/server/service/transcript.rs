use serenity::{
    all::{ChannelId, CreateAttachment, GetMessages, Message, MessageId},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::transcript::{file_name, keep_newest, render, TranscriptLine},
    util::{queue::TaskQueue, time::from_discord_timestamp},
};

/// Messages per history request, Discord's maximum.
const HISTORY_PAGE_SIZE: u8 = 100;
/// Upper bound on exported messages.
const MAX_TRANSCRIPT_MESSAGES: usize = 10_000;

/// Exports a channel's history as a plain-text file.
pub struct TranscriptService {
    http: Arc<Http>,
    task_queue: TaskQueue,
}

impl TranscriptService {
    pub fn new(http: Arc<Http>, task_queue: TaskQueue) -> Self {
        Self { http, task_queue }
    }

    /// Renders the channel's history, oldest message first, as `transcript-{channel}.txt`.
    ///
    /// Runs in the task queue.
    ///
    /// # Returns
    /// - `Ok(CreateAttachment)` - The transcript file
    /// - `Err(AppError::DiscordErr)` - The channel or its history could not be read
    pub async fn export(&self, channel_id: u64) -> Result<CreateAttachment, AppError> {
        self.task_queue.run(self.run_export(channel_id)).await
    }

    async fn run_export(&self, channel_id: u64) -> Result<CreateAttachment, AppError> {
        let channel = ChannelId::new(channel_id);
        let channel_name = channel
            .name(&self.http)
            .await
            .unwrap_or_else(|_| channel_id.to_string());

        // Newest first; reads one page past the cap to tell whether anything was dropped.
        let mut lines = Vec::new();
        let mut before: Option<MessageId> = None;
        while lines.len() <= MAX_TRANSCRIPT_MESSAGES {
            let mut request = GetMessages::new().limit(HISTORY_PAGE_SIZE);
            if let Some(before) = before {
                request = request.before(before);
            }
            let messages = channel.messages(&self.http, request).await?;
            let Some(oldest) = messages.last() else {
                break;
            };
            before = Some(oldest.id);
            let page_len = messages.len();

            lines.extend(messages.iter().map(to_line));
            if page_len < HISTORY_PAGE_SIZE as usize {
                break;
            }
        }
        let (lines, truncated) = keep_newest(lines, MAX_TRANSCRIPT_MESSAGES);

        tracing::debug!(
            "Exported {} messages from channel {} (truncated: {})",
            lines.len(),
            channel_id,
            truncated
        );

        let text = render(&channel_name, &lines, truncated);

        Ok(CreateAttachment::bytes(text.into_bytes(), file_name(channel_id)))
    }
}

fn to_line(message: &Message) -> TranscriptLine {
    TranscriptLine {
        created_at: from_discord_timestamp(message.timestamp),
        author_name: message.author.name.clone(),
        author_id: message.author.id.get(),
        content: message.content.clone(),
        attachment_urls: message.attachments.iter().map(|a| a.url.clone()).collect(),
        embed_titles: message
            .embeds
            .iter()
            .filter_map(|e| e.title.clone())
            .collect(),
    }
}
