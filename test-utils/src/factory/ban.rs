//! Ban factory for creating test ban records.

use crate::factory::helpers::next_snowflake;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating ban records. Defaults to an active one-day ban.
pub struct BanFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    applied_by_id: i64,
    applied_until: Option<DateTime<Utc>>,
    is_disabled: bool,
}

impl<'a> BanFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64, user_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id,
            applied_by_id: next_snowflake(),
            applied_until: Some(Utc::now() + Duration::days(1)),
            is_disabled: false,
        }
    }

    pub fn applied_until(mut self, applied_until: Option<DateTime<Utc>>) -> Self {
        self.applied_until = applied_until;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::ban::Model, DbErr> {
        let now = Utc::now();
        entity::ban::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            applied_by_id: ActiveValue::Set(self.applied_by_id),
            applied_until: ActiveValue::Set(self.applied_until),
            reason: ActiveValue::Set(Some("Test ban".to_string())),
            lifted_by_id: ActiveValue::Set(None),
            lifted_on: ActiveValue::Set(None),
            lift_reason: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ban(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::ban::Model, DbErr> {
    BanFactory::new(db, guild_id, user_id).build().await
}
