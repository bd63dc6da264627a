//! Ticket membership and activity.

use chrono::{DateTime, Utc};
use serenity::all::{
    ChannelId, PermissionOverwrite, PermissionOverwriteType, Permissions, UserId,
};

use crate::server::{
    data::ticket::TicketRepository,
    error::{ticket::TicketError, AppError},
    model::ticket::Ticket,
};

use super::{member_permissions, TicketService};

impl<'a> TicketService<'a> {
    /// Gives `user_id` access to the ticket in `channel_id`.
    ///
    /// Adding the owner or an already added member only refreshes the permission overwrite.
    pub async fn add_member(&self, channel_id: u64, user_id: u64) -> Result<Ticket, AppError> {
        let ticket = self.get_by_channel(channel_id).await?;

        ChannelId::new(channel_id)
            .create_permission(
                &self.http,
                PermissionOverwrite {
                    allow: member_permissions(),
                    deny: Permissions::empty(),
                    kind: PermissionOverwriteType::Member(UserId::new(user_id)),
                },
            )
            .await?;

        if user_id == ticket.user_id || ticket.added_user_ids.contains(&user_id) {
            return Ok(ticket);
        }

        let mut added = ticket.added_user_ids.clone();
        added.push(user_id);

        tracing::debug!("Added {} to ticket #{}", user_id, ticket.number);

        Ok(TicketRepository::new(self.db)
            .set_added_users(ticket.id, &added)
            .await?
            .ok_or(TicketError::NotATicket)?)
    }

    /// Removes a member's access to the ticket in `channel_id`.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Updated ticket
    /// - `Err(AppError::BadRequest)` - `user_id` owns the ticket
    /// - `Err(TicketError::NotATicket)` - No live ticket in the channel
    pub async fn remove_member(&self, channel_id: u64, user_id: u64) -> Result<Ticket, AppError> {
        let ticket = self.get_by_channel(channel_id).await?;
        if user_id == ticket.user_id {
            return Err(AppError::BadRequest(
                "The ticket owner cannot be removed from their ticket".to_string(),
            ));
        }

        ChannelId::new(channel_id)
            .delete_permission(&self.http, PermissionOverwriteType::Member(UserId::new(user_id)))
            .await?;

        let added: Vec<u64> = ticket
            .added_user_ids
            .iter()
            .copied()
            .filter(|id| *id != user_id)
            .collect();

        Ok(TicketRepository::new(self.db)
            .set_added_users(ticket.id, &added)
            .await?
            .ok_or(TicketError::NotATicket)?)
    }

    /// Records activity in `channel_id` if it holds an open ticket.
    pub async fn touch(&self, channel_id: u64, at: DateTime<Utc>) -> Result<bool, AppError> {
        Ok(TicketRepository::new(self.db).touch(channel_id, at).await?)
    }
}
