use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{model::reminder::Reminder, util::snowflake::to_db};

pub struct ReminderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReminderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a reminder that first fires at `set_for`.
    ///
    /// `cron_expression` makes it recurring; it must already be validated.
    pub async fn create(
        &self,
        guild_id: u64,
        channel_id: u64,
        creator_id: u64,
        text: String,
        set_for: DateTime<Utc>,
        cron_expression: Option<String>,
    ) -> Result<Reminder, DbErr> {
        let now = Utc::now();
        let model = entity::reminder::ActiveModel {
            guild_id: ActiveValue::Set(to_db(guild_id)),
            channel_id: ActiveValue::Set(to_db(channel_id)),
            creator_id: ActiveValue::Set(to_db(creator_id)),
            text: ActiveValue::Set(text),
            set_for: ActiveValue::Set(set_for),
            cron_expression: ActiveValue::Set(cron_expression),
            is_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reminder::from_entity(model))
    }

    /// Active reminders set by `creator_id` in the guild, soonest first.
    pub async fn get_active_by_creator(
        &self,
        guild_id: u64,
        creator_id: u64,
    ) -> Result<Vec<Reminder>, DbErr> {
        let models = entity::prelude::Reminder::find()
            .filter(entity::reminder::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::reminder::Column::CreatorId.eq(to_db(creator_id)))
            .filter(entity::reminder::Column::IsDisabled.eq(false))
            .order_by_asc(entity::reminder::Column::SetFor)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Reminder::from_entity).collect())
    }

    /// Active reminders due at or before `now`, across all guilds.
    pub async fn get_due(&self, now: DateTime<Utc>) -> Result<Vec<Reminder>, DbErr> {
        let models = entity::prelude::Reminder::find()
            .filter(entity::reminder::Column::IsDisabled.eq(false))
            .filter(entity::reminder::Column::SetFor.lte(now))
            .order_by_asc(entity::reminder::Column::SetFor)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(Reminder::from_entity).collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Reminder>, DbErr> {
        let model = entity::prelude::Reminder::find_by_id(id).one(self.db).await?;

        Ok(model.map(Reminder::from_entity))
    }

    pub async fn disable(&self, id: i32) -> Result<Option<Reminder>, DbErr> {
        self.update(id, |reminder| {
            reminder.is_disabled = ActiveValue::Set(true);
        })
        .await
    }

    /// Moves a recurring reminder to its next occurrence.
    pub async fn reschedule(
        &self,
        id: i32,
        set_for: DateTime<Utc>,
    ) -> Result<Option<Reminder>, DbErr> {
        self.update(id, |reminder| {
            reminder.set_for = ActiveValue::Set(set_for);
        })
        .await
    }

    async fn update(
        &self,
        id: i32,
        apply: impl FnOnce(&mut entity::reminder::ActiveModel),
    ) -> Result<Option<Reminder>, DbErr> {
        let Some(model) = entity::prelude::Reminder::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        apply(&mut active);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Reminder::from_entity(active.update(self.db).await?)))
    }
}
