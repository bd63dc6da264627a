//! Support tickets and their lifecycle.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::ticket::{PaginatedTicketsDto, TicketDto},
    server::{model::Paginated, util::snowflake::from_db},
};

/// Lifecycle state derived from a ticket's columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketState {
    Open,
    Closed,
    Deleted,
}

impl TicketState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Deleted => "deleted",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ticket {
    pub id: i32,
    pub guild_id: u64,
    /// Per-guild ticket number, taken from `TicketingConfig::last_ticket_id`.
    pub number: i64,
    pub user_id: u64,
    pub channel_id: u64,
    pub welcome_message_id: Option<u64>,
    /// Members given access to the ticket besides the owner.
    pub added_user_ids: Vec<u64>,
    pub closed_by_id: Option<u64>,
    pub closed_on: Option<DateTime<Utc>>,
    pub reopened_by_id: Option<u64>,
    pub reopened_on: Option<DateTime<Utc>>,
    pub last_activity_at: DateTime<Utc>,
    pub is_disabled: bool,
    pub created_at: DateTime<Utc>,
}

impl Ticket {
    /// Converts the entity, decoding the JSON list of added members.
    ///
    /// # Returns
    /// - `Ok(Ticket)` - Converted ticket
    /// - `Err(DbErr::Json)` - `added_user_ids` does not hold a JSON array of ids
    pub fn from_entity(entity: entity::ticket::Model) -> Result<Self, DbErr> {
        let added_user_ids: Vec<u64> = serde_json::from_str(&entity.added_user_ids)
            .map_err(|e| DbErr::Json(format!("ticket.added_user_ids: {}", e)))?;

        Ok(Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            number: entity.guild_specific_id,
            user_id: from_db(entity.user_id),
            channel_id: from_db(entity.channel_id),
            welcome_message_id: entity.welcome_message_id.map(from_db),
            added_user_ids,
            closed_by_id: entity.closed_by_id.map(from_db),
            closed_on: entity.closed_on,
            reopened_by_id: entity.reopened_by_id.map(from_db),
            reopened_on: entity.reopened_on,
            last_activity_at: entity.last_activity_at,
            is_disabled: entity.is_disabled,
            created_at: entity.created_at,
        })
    }

    pub fn state(&self) -> TicketState {
        if self.is_disabled {
            TicketState::Deleted
        } else if self.closed_on.is_some() {
            TicketState::Closed
        } else {
            TicketState::Open
        }
    }

    pub fn into_dto(self) -> TicketDto {
        TicketDto {
            id: self.id,
            number: self.number,
            user_id: self.user_id,
            channel_id: self.channel_id,
            state: self.state().as_str().to_string(),
            closed_on: self.closed_on,
            last_activity_at: self.last_activity_at,
            created_at: self.created_at,
        }
    }
}

impl Paginated<Ticket> {
    pub fn into_dto(self) -> PaginatedTicketsDto {
        PaginatedTicketsDto {
            tickets: self.items.into_iter().map(Ticket::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Channel name for ticket `number`, e.g. `ticket-0042`.
pub fn channel_name(prefix: &str, number: i64) -> String {
    format!("{}-{:04}", prefix, number)
}

#[derive(Debug, Clone)]
pub struct CreateTicketParams {
    pub guild_id: u64,
    pub number: i64,
    pub user_id: u64,
    pub channel_id: u64,
    pub welcome_message_id: Option<u64>,
}

/// Custom ids of the ticket buttons.
pub mod button {
    pub const OPEN: &str = "ticket:open";
    pub const CLOSE: &str = "ticket:close";
    pub const REOPEN: &str = "ticket:reopen";
    pub const DELETE: &str = "ticket:delete";
    pub const TRANSCRIPT: &str = "ticket:transcript";
}
