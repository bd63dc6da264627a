//! Ticketing config factory.

use crate::factory::helpers::next_snowflake;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for a guild's ticketing configuration.
///
/// Defaults to a usable configuration: both categories and the log channel are set, prefixes
/// are `ticket`/`closed`, the counter starts at zero and no auto-close or clean-up is set.
pub struct TicketingConfigFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: i64,
    open_category_id: Option<i64>,
    closed_category_id: Option<i64>,
    log_channel_id: Option<i64>,
    last_ticket_id: i64,
    close_after_seconds: Option<i64>,
    clean_after_seconds: Option<i64>,
    is_disabled: bool,
}

impl<'a> TicketingConfigFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, guild_id: i64) -> Self {
        Self {
            db,
            guild_id,
            open_category_id: Some(next_snowflake()),
            closed_category_id: Some(next_snowflake()),
            log_channel_id: Some(next_snowflake()),
            last_ticket_id: 0,
            close_after_seconds: None,
            clean_after_seconds: None,
            is_disabled: false,
        }
    }

    pub fn open_category_id(mut self, open_category_id: Option<i64>) -> Self {
        self.open_category_id = open_category_id;
        self
    }

    pub fn last_ticket_id(mut self, last_ticket_id: i64) -> Self {
        self.last_ticket_id = last_ticket_id;
        self
    }

    pub fn close_after_seconds(mut self, seconds: Option<i64>) -> Self {
        self.close_after_seconds = seconds;
        self
    }

    pub fn clean_after_seconds(mut self, seconds: Option<i64>) -> Self {
        self.clean_after_seconds = seconds;
        self
    }

    pub fn disabled(mut self, is_disabled: bool) -> Self {
        self.is_disabled = is_disabled;
        self
    }

    pub async fn build(self) -> Result<entity::ticketing_config::Model, DbErr> {
        let now = Utc::now();
        entity::ticketing_config::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            open_category_id: ActiveValue::Set(self.open_category_id),
            closed_category_id: ActiveValue::Set(self.closed_category_id),
            log_channel_id: ActiveValue::Set(self.log_channel_id),
            last_ticket_id: ActiveValue::Set(self.last_ticket_id),
            open_name_prefix: ActiveValue::Set("ticket".to_string()),
            closed_name_prefix: ActiveValue::Set("closed".to_string()),
            welcome_message: ActiveValue::Set(None),
            close_after_seconds: ActiveValue::Set(self.close_after_seconds),
            clean_after_seconds: ActiveValue::Set(self.clean_after_seconds),
            center_embed_config_id: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(self.is_disabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_ticketing_config(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::ticketing_config::Model, DbErr> {
    TicketingConfigFactory::new(db, guild_id).build().await
}
