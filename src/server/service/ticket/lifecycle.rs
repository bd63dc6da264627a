//! Closing, reopening and deleting tickets.

use chrono::Utc;
use serenity::all::{
    ButtonStyle, ChannelId, CreateMessage, EditChannel, PermissionOverwrite,
    PermissionOverwriteType, Permissions, UserId,
};

use crate::server::{
    data::ticket::TicketRepository,
    error::{ticket::TicketError, AppError},
    model::{
        audit_log::AuditAction,
        ticket::{button, channel_name, Ticket, TicketState},
    },
    service::{
        audit_log::AuditLogService, embed::TicketEnricher, moderation_log::ModerationLogService,
    },
};

use super::{buttons, member_permissions, TicketService};

impl<'a> TicketService<'a> {
    /// Closes the ticket in `channel_id`.
    ///
    /// Moves the channel to the closed category, renames it with the closed prefix, hides it
    /// from the owner and added members, and posts Reopen, Delete and Transcript buttons.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The closed ticket
    /// - `Err(TicketError::NotATicket)` - No ticket in the channel, or it was deleted
    /// - `Err(TicketError::AlreadyClosed)` - The ticket is closed
    pub async fn close(&self, channel_id: u64, closer_id: u64) -> Result<Ticket, AppError> {
        let ticket = self.get_by_channel(channel_id).await?;
        if ticket.state() == TicketState::Closed {
            return Err(TicketError::AlreadyClosed.into());
        }
        let config = self.config(ticket.guild_id).await?;
        let channel = ChannelId::new(channel_id);

        let mut edit = EditChannel::new().name(channel_name(&config.closed_name_prefix, ticket.number));
        if let Some(category_id) = config.closed_category_id {
            edit = edit.category(Some(ChannelId::new(category_id)));
        }
        channel.edit(&self.http, edit).await?;
        for user_id in participants(&ticket) {
            channel
                .create_permission(
                    &self.http,
                    PermissionOverwrite {
                        allow: Permissions::empty(),
                        deny: Permissions::VIEW_CHANNEL,
                        kind: PermissionOverwriteType::Member(UserId::new(user_id)),
                    },
                )
                .await?;
        }

        let ticket = TicketRepository::new(self.db)
            .close(ticket.id, closer_id, Utc::now())
            .await?
            .ok_or(TicketError::NotATicket)?;

        let embed = ModerationLogService::new(self.db, self.http.clone())
            .embed(ticket.guild_id)
            .await?
            .title(format!("Ticket #{:04} closed", ticket.number))
            .enrich(&TicketEnricher(&ticket))
            .build();
        channel
            .send_message(
                &self.http,
                CreateMessage::new().embed(embed.clone()).components(buttons(vec![
                    super::button(button::REOPEN, "Reopen", ButtonStyle::Success),
                    super::button(button::TRANSCRIPT, "Transcript", ButtonStyle::Secondary),
                    super::button(button::DELETE, "Delete", ButtonStyle::Danger),
                ])),
            )
            .await?;

        tracing::info!("Closed ticket #{} in guild {}", ticket.number, ticket.guild_id);

        AuditLogService::new(self.db)
            .record(
                ticket.guild_id,
                closer_id,
                Some(ticket.user_id),
                AuditAction::TicketClose,
                Some(format!("Ticket #{:04}", ticket.number)),
            )
            .await?;
        self.log_event(&config, embed).await;

        Ok(ticket)
    }

    /// Reopens a closed ticket, reversing `close`.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The reopened ticket
    /// - `Err(TicketError::NotATicket)` - No ticket in the channel, or it was deleted
    /// - `Err(TicketError::NotClosed)` - The ticket is open
    /// - `Err(TicketError::AlreadyOpen)` - The owner has opened another ticket since
    pub async fn reopen(&self, channel_id: u64, actor_id: u64) -> Result<Ticket, AppError> {
        let ticket = self.get_by_channel(channel_id).await?;
        if ticket.state() != TicketState::Closed {
            return Err(TicketError::NotClosed.into());
        }
        let ticket_repo = TicketRepository::new(self.db);
        if let Some(other) = ticket_repo
            .find_open_by_user(ticket.guild_id, ticket.user_id)
            .await?
        {
            return Err(TicketError::AlreadyOpen(other.channel_id).into());
        }
        let config = self.config(ticket.guild_id).await?;
        let channel = ChannelId::new(channel_id);

        let mut edit = EditChannel::new().name(channel_name(&config.open_name_prefix, ticket.number));
        if let Some(category_id) = config.open_category_id {
            edit = edit.category(Some(ChannelId::new(category_id)));
        }
        channel.edit(&self.http, edit).await?;
        for user_id in participants(&ticket) {
            channel
                .create_permission(
                    &self.http,
                    PermissionOverwrite {
                        allow: member_permissions(),
                        deny: Permissions::empty(),
                        kind: PermissionOverwriteType::Member(UserId::new(user_id)),
                    },
                )
                .await?;
        }

        let ticket = ticket_repo
            .reopen(ticket.id, actor_id, Utc::now())
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, "The owner already has an open ticket"))?
            .ok_or(TicketError::NotATicket)?;

        let embed = ModerationLogService::new(self.db, self.http.clone())
            .embed(ticket.guild_id)
            .await?
            .title(format!("Ticket #{:04} reopened", ticket.number))
            .description(format!("Reopened by <@{}>", actor_id))
            .enrich(&TicketEnricher(&ticket))
            .build();
        channel
            .send_message(
                &self.http,
                CreateMessage::new().embed(embed.clone()).components(buttons(vec![
                    super::button(button::CLOSE, "Close", ButtonStyle::Danger),
                ])),
            )
            .await?;

        tracing::info!("Reopened ticket #{} in guild {}", ticket.number, ticket.guild_id);

        AuditLogService::new(self.db)
            .record(
                ticket.guild_id,
                actor_id,
                Some(ticket.user_id),
                AuditAction::TicketReopen,
                Some(format!("Ticket #{:04}", ticket.number)),
            )
            .await?;
        self.log_event(&config, embed).await;

        Ok(ticket)
    }

    /// Deletes the ticket's channel and disables the ticket.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - The deleted ticket
    /// - `Err(TicketError::NotATicket)` - No ticket in the channel, or it was already deleted
    pub async fn delete(&self, channel_id: u64, actor_id: u64) -> Result<Ticket, AppError> {
        let ticket = self.get_by_channel(channel_id).await?;
        let ticket = TicketRepository::new(self.db)
            .disable(ticket.id)
            .await?
            .ok_or(TicketError::NotATicket)?;

        if let Err(e) = ChannelId::new(channel_id).delete(&self.http).await {
            tracing::warn!(
                "Ticket #{} disabled but its channel {} could not be deleted: {}",
                ticket.number,
                channel_id,
                e
            );
        }

        tracing::info!("Deleted ticket #{} in guild {}", ticket.number, ticket.guild_id);

        AuditLogService::new(self.db)
            .record(
                ticket.guild_id,
                actor_id,
                Some(ticket.user_id),
                AuditAction::TicketDelete,
                Some(format!("Ticket #{:04}", ticket.number)),
            )
            .await?;
        if let Ok(config) = self.config(ticket.guild_id).await {
            let embed = ModerationLogService::new(self.db, self.http.clone())
                .embed(ticket.guild_id)
                .await?
                .title(format!("Ticket #{:04} deleted", ticket.number))
                .description(format!("Deleted by <@{}>", actor_id))
                .enrich(&TicketEnricher(&ticket))
                .build();
            self.log_event(&config, embed).await;
        }

        Ok(ticket)
    }
}

/// The owner followed by every added member.
fn participants(ticket: &Ticket) -> Vec<u64> {
    std::iter::once(ticket.user_id)
        .chain(ticket.added_user_ids.iter().copied())
        .collect()
}
