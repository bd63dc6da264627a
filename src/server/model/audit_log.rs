//! Record of moderation actions.

use chrono::{DateTime, Utc};

use crate::{
    model::audit_log::{AuditLogDto, PaginatedAuditLogDto},
    server::{model::Paginated, util::snowflake::from_db},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditAction {
    Mute,
    Unmute,
    Ban,
    Unban,
    Prune,
    TicketClose,
    TicketReopen,
    TicketDelete,
    TagDelete,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mute => "mute",
            Self::Unmute => "unmute",
            Self::Ban => "ban",
            Self::Unban => "unban",
            Self::Prune => "prune",
            Self::TicketClose => "ticket_close",
            Self::TicketReopen => "ticket_reopen",
            Self::TicketDelete => "ticket_delete",
            Self::TagDelete => "tag_delete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuditLogEntry {
    pub id: i32,
    pub guild_id: u64,
    pub actor_id: u64,
    pub target_id: Option<u64>,
    pub action: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    pub fn from_entity(entity: entity::audit_log::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            actor_id: from_db(entity.actor_id),
            target_id: entity.target_id.map(from_db),
            action: entity.action,
            details: entity.details,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuditLogDto {
        AuditLogDto {
            id: self.id,
            actor_id: self.actor_id,
            target_id: self.target_id,
            action: self.action,
            details: self.details,
            created_at: self.created_at,
        }
    }
}

impl Paginated<AuditLogEntry> {
    pub fn into_dto(self) -> PaginatedAuditLogDto {
        PaginatedAuditLogDto {
            entries: self.items.into_iter().map(AuditLogEntry::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAuditLogParams {
    pub guild_id: u64,
    pub actor_id: u64,
    pub target_id: Option<u64>,
    pub action: AuditAction,
    pub details: Option<String>,
}
