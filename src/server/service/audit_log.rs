use sea_orm::DatabaseConnection;

use crate::server::{
    data::audit_log::AuditLogRepository,
    error::AppError,
    model::{
        audit_log::{AuditAction, AuditLogEntry, CreateAuditLogParams},
        Paginated,
    },
};

pub struct AuditLogService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a moderation action.
    pub async fn record(
        &self,
        guild_id: u64,
        actor_id: u64,
        target_id: Option<u64>,
        action: AuditAction,
        details: Option<String>,
    ) -> Result<AuditLogEntry, AppError> {
        let entry = AuditLogRepository::new(self.db)
            .create(CreateAuditLogParams {
                guild_id,
                actor_id,
                target_id,
                action,
                details,
            })
            .await?;

        tracing::debug!(
            "Recorded {} by {} in guild {}",
            entry.action,
            entry.actor_id,
            entry.guild_id
        );

        Ok(entry)
    }

    pub async fn get_paginated(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<AuditLogEntry>, AppError> {
        Ok(AuditLogRepository::new(self.db)
            .get_paginated_by_guild(guild_id, page, per_page)
            .await?)
    }
}
