//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for tickets. Defaults to an open ticket with a fresh channel id.
///
/// # Example
///
/// ```rust,ignore
/// let closed = TicketFactory::new(&db, guild.guild_id, owner_id)
///     .closed_on(Some(Utc::now()))
///     .build()
///     .await?;
/// ```
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    guild_specific_id: i64,
    channel_id: i64,
    closed_on: Option<DateTime<Utc>>,
    last_activity_at: DateTime<Utc>,
    is_disabled: bool,
}

impl<'a> TicketFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64, user_id: i64) -> Self {
        Self {
            db,
            guild_id,
            user_id,
            guild_specific_id: next_id() as i64,
            channel_id: next_snowflake(),
            closed_on: None,
            last_activity_at: Utc::now(),
            is_disabled: false,
        }
    }

    pub fn channel_id(mut self, channel_id: i64) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn closed_on(mut self, closed_on: Option<DateTime<Utc>>) -> Self {
        self.closed_on = closed_on;
        self
    }

    pub fn last_activity_at(mut self, last_activity_at: DateTime<Utc>) -> Self {
        self.last_activity_at = last_activity_at;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        let now = Utc::now();
        entity::ticket::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            guild_specific_id: ActiveValue::Set(self.guild_specific_id),
            user_id: ActiveValue::Set(self.user_id),
            channel_id: ActiveValue::Set(self.channel_id),
            welcome_message_id: ActiveValue::Set(None),
            added_user_ids: ActiveValue::Set("[]".to_string()),
            closed_by_id: ActiveValue::Set(self.closed_on.map(|_| self.user_id)),
            closed_on: ActiveValue::Set(self.closed_on),
            reopened_by_id: ActiveValue::Set(None),
            reopened_on: ActiveValue::Set(None),
            last_activity_at: ActiveValue::Set(self.last_activity_at),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open ticket owned by `user_id`.
pub async fn create_ticket(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db, guild_id, user_id).build().await
}
