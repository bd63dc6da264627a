//! Ticket log channel posts and transcripts.

use serenity::all::{ChannelId, CreateEmbed, CreateMessage};

use crate::server::{
    error::AppError,
    model::guild::TicketingConfig,
    service::{
        embed::TicketEnricher, moderation_log::ModerationLogService,
        transcript::TranscriptService,
    },
};

use super::TicketService;

impl<'a> TicketService<'a> {
    /// Exports the ticket's transcript to the ticketing log channel.
    ///
    /// # Returns
    /// - `Ok(channel_id)` - The log channel the transcript was posted to
    /// - `Err(TicketError::NotATicket)` - No live ticket in the channel
    /// - `Err(AppError::BadRequest)` - No ticketing log channel configured
    pub async fn send_transcript(
        &self,
        channel_id: u64,
        requested_by: u64,
    ) -> Result<u64, AppError> {
        let ticket = self.get_by_channel(channel_id).await?;
        let config = self.config(ticket.guild_id).await?;
        let log_channel_id = config.log_channel_id.ok_or_else(|| {
            AppError::BadRequest("No ticket log channel is configured".to_string())
        })?;

        let attachment = TranscriptService::new(self.http.clone(), self.task_queue.clone())
            .export(channel_id)
            .await?;
        let embed = ModerationLogService::new(self.db, self.http.clone())
            .embed(ticket.guild_id)
            .await?
            .title(format!("Transcript of ticket #{:04}", ticket.number))
            .description(format!("Requested by <@{}>", requested_by))
            .enrich(&TicketEnricher(&ticket))
            .build();

        ChannelId::new(log_channel_id)
            .send_message(
                &self.http,
                CreateMessage::new().embed(embed).add_file(attachment),
            )
            .await?;

        tracing::info!(
            "Posted transcript of ticket #{} to channel {}",
            ticket.number,
            log_channel_id
        );

        Ok(log_channel_id)
    }

    /// Posts to the ticketing log channel. Failures are logged only.
    pub(super) async fn log_event(&self, config: &TicketingConfig, embed: CreateEmbed) {
        let Some(channel_id) = config.log_channel_id else {
            return;
        };

        if let Err(e) = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await
        {
            tracing::warn!("Failed to post to ticket log channel {}: {}", channel_id, e);
        }
    }
}
