//! Background closing and deletion of tickets.

use chrono::{DateTime, Utc};

use crate::server::{
    data::{ticket::TicketRepository, ticketing_config::TicketingConfigRepository},
    error::AppError,
};

use super::TicketService;

impl<'a> TicketService<'a> {
    /// Closes open tickets idle for longer than their guild's `close_after`.
    ///
    /// A failure on one ticket is logged and does not stop the rest.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of tickets closed
    /// - `Err(AppError)` - Loading configurations or tickets failed
    pub async fn close_inactive(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let configs = TicketingConfigRepository::new(self.db)
            .get_with_auto_cleanup()
            .await?;
        let ticket_repo = TicketRepository::new(self.db);
        let mut cached_bot_id = None;
        let mut closed = 0;

        for config in configs {
            let Some(close_after) = config.close_after else {
                continue;
            };
            let Some(cutoff) = now.checked_sub_signed(close_after) else {
                tracing::warn!("Skipping guild {}: close_after is out of range", config.guild_id);
                continue;
            };
            let tickets = ticket_repo.get_inactive_open(config.guild_id, cutoff).await?;
            if tickets.is_empty() {
                continue;
            }
            let bot_id = match cached_bot_id {
                Some(id) => id,
                None => *cached_bot_id.insert(self.bot_id().await?),
            };

            for ticket in tickets {
                match self.close(ticket.channel_id, bot_id).await {
                    Ok(_) => closed += 1,
                    Err(e) => tracing::error!(
                        "Failed to auto-close ticket #{} in guild {}: {}",
                        ticket.number,
                        ticket.guild_id,
                        e
                    ),
                }
            }
        }

        Ok(closed)
    }

    /// Deletes closed tickets older than their guild's `clean_after`.
    ///
    /// # Returns
    /// - `Ok(usize)` - Number of tickets deleted
    /// - `Err(AppError)` - Loading configurations or tickets failed
    pub async fn delete_stale(&self, now: DateTime<Utc>) -> Result<usize, AppError> {
        let configs = TicketingConfigRepository::new(self.db)
            .get_with_auto_cleanup()
            .await?;
        let ticket_repo = TicketRepository::new(self.db);
        let mut cached_bot_id = None;
        let mut deleted = 0;

        for config in configs {
            let Some(clean_after) = config.clean_after else {
                continue;
            };
            let Some(cutoff) = now.checked_sub_signed(clean_after) else {
                tracing::warn!("Skipping guild {}: clean_after is out of range", config.guild_id);
                continue;
            };
            let tickets = ticket_repo.get_closed_before(config.guild_id, cutoff).await?;
            if tickets.is_empty() {
                continue;
            }
            let bot_id = match cached_bot_id {
                Some(id) => id,
                None => *cached_bot_id.insert(self.bot_id().await?),
            };

            for ticket in tickets {
                match self.delete(ticket.channel_id, bot_id).await {
                    Ok(_) => deleted += 1,
                    Err(e) => tracing::error!(
                        "Failed to delete stale ticket #{} in guild {}: {}",
                        ticket.number,
                        ticket.guild_id,
                        e
                    ),
                }
            }
        }

        Ok(deleted)
    }
}
