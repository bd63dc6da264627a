use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        moderation::{
            extends, ApplyOutcome, ApplyPunishmentParams, ApplyResult, LiftPunishmentParams,
            Punishment,
        },
        Paginated,
    },
    util::snowflake::to_db,
};

pub struct BanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the user's active ban in the guild, if any.
    pub async fn get_active(&self, guild_id: u64, user_id: u64) -> Result<Option<Punishment>, DbErr> {
        Ok(self
            .find_active(guild_id, user_id)
            .await?
            .map(Punishment::from_ban))
    }

    /// Creates a ban, or extends the user's active ban when the new end is later.
    ///
    /// An indefinite ban (`applied_until: None`) counts as ending last. When the active ban
    /// already ends at or after the requested end it is returned untouched.
    ///
    /// # Returns
    /// - `Ok(ApplyResult)`: The stored ban and what happened to it
    /// - `Err(DbErr)`: Database error
    pub async fn apply(&self, params: ApplyPunishmentParams) -> Result<ApplyResult, DbErr> {
        let now = Utc::now();

        match self.find_active(params.guild_id, params.user_id).await? {
            None => {
                let model = entity::ban::ActiveModel {
                    guild_id: ActiveValue::Set(to_db(params.guild_id)),
                    user_id: ActiveValue::Set(to_db(params.user_id)),
                    applied_by_id: ActiveValue::Set(to_db(params.moderator_id)),
                    applied_until: ActiveValue::Set(params.applied_until),
                    reason: ActiveValue::Set(params.reason),
                    lifted_by_id: ActiveValue::Set(None),
                    lifted_on: ActiveValue::Set(None),
                    lift_reason: ActiveValue::Set(None),
                    is_disabled: ActiveValue::Set(false),
                    created_at: ActiveValue::Set(now),
                    updated_at: ActiveValue::Set(now),
                    ..Default::default()
                }
                .insert(self.db)
                .await?;

                Ok(ApplyResult {
                    outcome: ApplyOutcome::Created,
                    punishment: Punishment::from_ban(model),
                })
            }
            Some(existing) if extends(existing.applied_until, params.applied_until) => {
                let mut active = existing.into_active_model();
                active.applied_until = ActiveValue::Set(params.applied_until);
                active.applied_by_id = ActiveValue::Set(to_db(params.moderator_id));
                active.reason = ActiveValue::Set(params.reason);
                active.updated_at = ActiveValue::Set(now);

                Ok(ApplyResult {
                    outcome: ApplyOutcome::Extended,
                    punishment: Punishment::from_ban(active.update(self.db).await?),
                })
            }
            Some(existing) => Ok(ApplyResult {
                outcome: ApplyOutcome::AlreadyLonger,
                punishment: Punishment::from_ban(existing),
            }),
        }
    }

    /// Lifts the user's active ban.
    ///
    /// # Returns
    /// - `Ok(Some(Punishment))`: The lifted ban
    /// - `Ok(None)`: The user has no active ban
    /// - `Err(DbErr)`: Database error
    pub async fn lift(&self, params: LiftPunishmentParams) -> Result<Option<Punishment>, DbErr> {
        let Some(existing) = self.find_active(params.guild_id, params.user_id).await? else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active = existing.into_active_model();
        active.lifted_by_id = ActiveValue::Set(Some(to_db(params.lifted_by_id)));
        active.lifted_on = ActiveValue::Set(Some(now));
        active.lift_reason = ActiveValue::Set(params.reason);
        active.is_disabled = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(now);

        Ok(Some(Punishment::from_ban(active.update(self.db).await?)))
    }

    /// Active timed bans whose end is at or before `now`, across all guilds.
    pub async fn get_expired(&self, now: DateTime<Utc>) -> Result<Vec<Punishment>, DbErr> {
        let models = entity::prelude::Ban::find()
            .filter(entity::ban::Column::IsDisabled.eq(false))
            .filter(entity::ban::Column::AppliedUntil.is_not_null())
            .filter(entity::ban::Column::AppliedUntil.lte(now))
            .order_by_asc(entity::ban::Column::AppliedUntil)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Punishment::from_ban).collect())
    }

    /// Gets a page of the guild's active bans, newest first.
    pub async fn get_active_paginated(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Punishment>, DbErr> {
        let paginator = entity::prelude::Ban::find()
            .filter(entity::ban::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::ban::Column::IsDisabled.eq(false))
            .order_by_desc(entity::ban::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let bans = paginator.fetch_page(page).await?;

        Ok(Paginated::new(
            bans.into_iter().map(Punishment::from_ban).collect(),
            total,
            page,
            per_page,
        ))
    }

    async fn find_active(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<entity::ban::Model>, DbErr> {
        entity::prelude::Ban::find()
            .filter(entity::ban::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::ban::Column::UserId.eq(to_db(user_id)))
            .filter(entity::ban::Column::IsDisabled.eq(false))
            .one(self.db)
            .await
    }
}
