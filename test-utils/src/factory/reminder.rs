//! Reminder factory.

use crate::factory::helpers::next_snowflake;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for reminders. Defaults to a one-shot reminder due in 10 minutes.
pub struct ReminderFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    creator_id: i64,
    channel_id: i64,
    set_for: DateTime<Utc>,
    cron_expression: Option<String>,
    is_disabled: bool,
}

impl<'a> ReminderFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64, creator_id: i64) -> Self {
        Self {
            db,
            guild_id,
            creator_id,
            channel_id: next_snowflake(),
            set_for: Utc::now() + Duration::minutes(10),
            cron_expression: None,
            is_disabled: false,
        }
    }

    pub fn set_for(mut self, set_for: DateTime<Utc>) -> Self {
        self.set_for = set_for;
        self
    }

    pub fn cron_expression(mut self, cron_expression: Option<String>) -> Self {
        self.cron_expression = cron_expression;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::reminder::Model, DbErr> {
        let now = Utc::now();
        entity::reminder::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            channel_id: ActiveValue::Set(self.channel_id),
            creator_id: ActiveValue::Set(self.creator_id),
            text: ActiveValue::Set("Test reminder".to_string()),
            set_for: ActiveValue::Set(self.set_for),
            cron_expression: ActiveValue::Set(self.cron_expression),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_reminder(
    db: &DatabaseConnection,
    guild_id: i64,
    creator_id: i64,
) -> Result<entity::reminder::Model, DbErr> {
    ReminderFactory::new(db, guild_id, creator_id).build().await
}
