use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        audit_log::{AuditLogEntry, CreateAuditLogParams},
        Paginated,
    },
    util::snowflake::to_db,
};

pub struct AuditLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditLogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateAuditLogParams) -> Result<AuditLogEntry, DbErr> {
        let model = entity::audit_log::ActiveModel {
            guild_id: ActiveValue::Set(to_db(params.guild_id)),
            actor_id: ActiveValue::Set(to_db(params.actor_id)),
            target_id: ActiveValue::Set(params.target_id.map(to_db)),
            action: ActiveValue::Set(params.action.as_str().to_string()),
            details: ActiveValue::Set(params.details),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(AuditLogEntry::from_entity(model))
    }

    /// Gets a page of the guild's audit log, newest first.
    pub async fn get_paginated_by_guild(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<AuditLogEntry>, DbErr> {
        let paginator = entity::prelude::AuditLog::find()
            .filter(entity::audit_log::Column::GuildId.eq(to_db(guild_id)))
            .order_by_desc(entity::audit_log::Column::CreatedAt)
            .order_by_desc(entity::audit_log::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entries = paginator.fetch_page(page).await?;

        Ok(Paginated::new(
            entries.into_iter().map(AuditLogEntry::from_entity).collect(),
            total,
            page,
            per_page,
        ))
    }
}
