//! Mute factory for creating test mute records.

use crate::factory::helpers::next_snowflake;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating mute records.
///
/// # Example
///
/// ```rust,ignore
/// let expired = MuteFactory::new(&db, guild.guild_id, 42)
///     .applied_until(Some(Utc::now() - Duration::minutes(5)))
///     .build()
///     .await?;
/// ```
pub struct MuteFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    applied_by_id: i64,
    applied_until: Option<DateTime<Utc>>,
    reason: Option<String>,
    is_disabled: bool,
}

impl<'a> MuteFactory<'a> {
    /// Creates a new MuteFactory with default values.
    ///
    /// Defaults:
    /// - applied_by_id: unique snowflake
    /// - applied_until: 1 hour from now
    /// - reason: `Some("Test mute")`
    /// - is_disabled: `false`
    pub fn new(db: &'a DatabaseConnection, guild_id: i64, user_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id,
            applied_by_id: next_snowflake(),
            applied_until: Some(Utc::now() + Duration::hours(1)),
            reason: Some("Test mute".to_string()),
            is_disabled: false,
        }
    }

    pub fn applied_by_id(mut self, applied_by_id: i64) -> Self {
        self.applied_by_id = applied_by_id;
        self
    }

    /// Sets the end of the mute; `None` is indefinite.
    pub fn applied_until(mut self, applied_until: Option<DateTime<Utc>>) -> Self {
        self.applied_until = applied_until;
        self
    }

    pub fn reason(mut self, reason: Option<String>) -> Self {
        self.reason = reason;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::mute::Model, DbErr> {
        let now = Utc::now();
        entity::mute::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id),
            applied_by_id: ActiveValue::Set(self.applied_by_id),
            applied_until: ActiveValue::Set(self.applied_until),
            reason: ActiveValue::Set(self.reason),
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

/// Creates an active one-hour mute for `user_id`.
pub async fn create_mute(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::mute::Model, DbErr> {
    MuteFactory::new(db, guild_id, user_id).build().await
}
