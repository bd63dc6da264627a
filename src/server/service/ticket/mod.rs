//! Ticket channels and their lifecycle.
//!
//! This module provides the `TicketService`, which keeps a ticket's Discord channel and its
//! stored row in step as the ticket moves between open, closed and deleted.
//!
//! The service is organized into separate modules by concern:
//! - `open` - Opening tickets and posting the "open a ticket" center message
//! - `lifecycle` - Closing, reopening and deleting
//! - `member` - Adding and removing members, recording activity
//! - `cleanup` - Auto-closing inactive tickets and deleting stale closed ones
//! - `log` - Ticket log channel posts and transcripts

pub mod cleanup;
pub mod lifecycle;
pub mod log;
pub mod member;
pub mod open;

use sea_orm::DatabaseConnection;
use serenity::{
    all::{ButtonStyle, CreateActionRow, CreateButton, Permissions},
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{ticket::TicketRepository, ticketing_config::TicketingConfigRepository},
    error::{ticket::TicketError, AppError},
    model::{
        guild::TicketingConfig,
        ticket::{Ticket, TicketState},
        Paginated,
    },
    util::queue::TaskQueue,
};

/// Permissions granted to a ticket's owner and added members.
pub(super) fn member_permissions() -> Permissions {
    Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::READ_MESSAGE_HISTORY
        | Permissions::ATTACH_FILES
        | Permissions::EMBED_LINKS
}

/// Permissions the bot needs in a ticket channel to manage it later.
pub(super) fn bot_permissions() -> Permissions {
    member_permissions() | Permissions::MANAGE_CHANNELS | Permissions::MANAGE_ROLES
}

pub(super) fn button(custom_id: &str, label: &str, style: ButtonStyle) -> CreateButton {
    CreateButton::new(custom_id).label(label).style(style)
}

pub(super) fn buttons(buttons: Vec<CreateButton>) -> Vec<CreateActionRow> {
    vec![CreateActionRow::Buttons(buttons)]
}

/// Service managing ticket channels.
///
/// Holds the task queue so transcripts requested from ticket buttons never overlap with
/// other bulk operations.
pub struct TicketService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
    task_queue: TaskQueue,
}

impl<'a> TicketService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>, task_queue: TaskQueue) -> Self {
        Self {
            db,
            http,
            task_queue,
        }
    }

    /// Gets the ticket held in `channel_id`.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - An open or closed ticket
    /// - `Err(TicketError::NotATicket)` - No ticket lives in the channel, or it was deleted
    pub async fn get_by_channel(&self, channel_id: u64) -> Result<Ticket, AppError> {
        TicketRepository::new(self.db)
            .find_by_channel_id(channel_id)
            .await?
            .filter(|ticket| ticket.state() != TicketState::Deleted)
            .ok_or_else(|| TicketError::NotATicket.into())
    }

    pub async fn list(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Ticket>, AppError> {
        Ok(TicketRepository::new(self.db)
            .get_paginated_by_guild(guild_id, page, per_page)
            .await?)
    }

    /// Gets the guild's ticketing configuration.
    ///
    /// # Returns
    /// - `Ok(TicketingConfig)` - The configuration, usable or not
    /// - `Err(TicketError::NotConfigured)` - The guild never configured ticketing
    async fn config(&self, guild_id: u64) -> Result<TicketingConfig, AppError> {
        TicketingConfigRepository::new(self.db)
            .get_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| TicketError::NotConfigured.into())
    }

    async fn bot_id(&self) -> Result<u64, AppError> {
        Ok(self.http.get_current_user().await?.id.get())
    }
}
