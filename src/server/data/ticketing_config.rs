use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection,
    DbErr, EntityTrait, IntoActiveModel, QueryFilter, TransactionTrait,
};

use crate::server::{
    model::guild::{
        TicketingConfig, UpsertTicketingConfigParams, DEFAULT_CLOSED_PREFIX, DEFAULT_OPEN_PREFIX,
    },
    util::snowflake::to_db,
};

pub struct TicketingConfigRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketingConfigRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_guild_id(&self, guild_id: u64) -> Result<Option<TicketingConfig>, DbErr> {
        let model = entity::prelude::TicketingConfig::find()
            .filter(entity::ticketing_config::Column::GuildId.eq(to_db(guild_id)))
            .one(self.db)
            .await?;

        Ok(model.map(TicketingConfig::from_entity))
    }

    /// Enabled configs that close or clean tickets automatically.
    pub async fn get_with_auto_cleanup(&self) -> Result<Vec<TicketingConfig>, DbErr> {
        let models = entity::prelude::TicketingConfig::find()
            .filter(entity::ticketing_config::Column::IsDisabled.eq(false))
            .filter(
                Condition::any()
                    .add(entity::ticketing_config::Column::CloseAfterSeconds.is_not_null())
                    .add(entity::ticketing_config::Column::CleanAfterSeconds.is_not_null()),
            )
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(TicketingConfig::from_entity).collect())
    }

    /// Creates the guild's ticketing config or updates the fields set in `params`.
    ///
    /// Fields left `None` keep their stored value. On insert the name prefixes default to
    /// `ticket` and `closed`.
    pub async fn upsert(&self, params: UpsertTicketingConfigParams) -> Result<TicketingConfig, DbErr> {
        let now = Utc::now();
        let existing = entity::prelude::TicketingConfig::find()
            .filter(entity::ticketing_config::Column::GuildId.eq(to_db(params.guild_id)))
            .one(self.db)
            .await?;

        let is_new = existing.is_none();
        let mut active = match existing {
            Some(model) => model.into_active_model(),
            None => entity::ticketing_config::ActiveModel {
                guild_id: ActiveValue::Set(to_db(params.guild_id)),
                open_category_id: ActiveValue::Set(None),
                closed_category_id: ActiveValue::Set(None),
                log_channel_id: ActiveValue::Set(None),
                last_ticket_id: ActiveValue::Set(0),
                open_name_prefix: ActiveValue::Set(DEFAULT_OPEN_PREFIX.to_string()),
                closed_name_prefix: ActiveValue::Set(DEFAULT_CLOSED_PREFIX.to_string()),
                welcome_message: ActiveValue::Set(None),
                close_after_seconds: ActiveValue::Set(None),
                clean_after_seconds: ActiveValue::Set(None),
                center_embed_config_id: ActiveValue::Set(None),
                is_disabled: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                ..Default::default()
            },
        };

        if let Some(id) = params.open_category_id {
            active.open_category_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(id) = params.closed_category_id {
            active.closed_category_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(id) = params.log_channel_id {
            active.log_channel_id = ActiveValue::Set(Some(to_db(id)));
        }
        if let Some(prefix) = params.open_name_prefix {
            active.open_name_prefix = ActiveValue::Set(prefix);
        }
        if let Some(prefix) = params.closed_name_prefix {
            active.closed_name_prefix = ActiveValue::Set(prefix);
        }
        if let Some(message) = params.welcome_message {
            active.welcome_message = ActiveValue::Set(Some(message));
        }
        if let Some(duration) = params.close_after {
            active.close_after_seconds = ActiveValue::Set(Some(duration.num_seconds()));
        }
        if let Some(duration) = params.clean_after {
            active.clean_after_seconds = ActiveValue::Set(Some(duration.num_seconds()));
        }
        if let Some(id) = params.center_embed_config_id {
            active.center_embed_config_id = ActiveValue::Set(Some(id));
        }
        if let Some(is_disabled) = params.is_disabled {
            active.is_disabled = ActiveValue::Set(is_disabled);
        }
        active.updated_at = ActiveValue::Set(now);

        let model = if is_new {
            active.insert(self.db).await?
        } else {
            active.update(self.db).await?
        };

        Ok(TicketingConfig::from_entity(model))
    }

    /// Increments the guild's ticket counter and returns the new value.
    ///
    /// The increment and the read share a transaction. The `UPDATE` takes SQLite's write
    /// lock first, so concurrent callers get distinct numbers.
    ///
    /// # Returns
    /// - `Ok(Some(number))`: The number for the next ticket
    /// - `Ok(None)`: The guild has no ticketing config
    /// - `Err(DbErr)`: Database error
    pub async fn next_ticket_number(&self, guild_id: u64) -> Result<Option<i64>, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::TicketingConfig::update_many()
            .col_expr(
                entity::ticketing_config::Column::LastTicketId,
                Expr::col(entity::ticketing_config::Column::LastTicketId).add(1),
            )
            .filter(entity::ticketing_config::Column::GuildId.eq(to_db(guild_id)))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let number = entity::prelude::TicketingConfig::find()
            .filter(entity::ticketing_config::Column::GuildId.eq(to_db(guild_id)))
            .one(&txn)
            .await?
            .map(|config| config.last_ticket_id);
        txn.commit().await?;

        Ok(number)
    }
}
