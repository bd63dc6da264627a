use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{model::booster::ServerBooster, util::snowflake::to_db};

pub struct ServerBoosterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerBoosterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a booster record unless the user already has an active one.
    ///
    /// # Returns
    /// - `Ok(Some(ServerBooster))`: The new record
    /// - `Ok(None)`: The user already has an active record
    /// - `Err(DbErr)`: Database error
    pub async fn start(
        &self,
        guild_id: u64,
        user_id: u64,
        boosting_since: DateTime<Utc>,
    ) -> Result<Option<ServerBooster>, DbErr> {
        if self.find_active(guild_id, user_id).await?.is_some() {
            return Ok(None);
        }

        let now = Utc::now();
        let model = entity::server_booster::ActiveModel {
            guild_id: ActiveValue::Set(to_db(guild_id)),
            user_id: ActiveValue::Set(to_db(user_id)),
            boosting_since: ActiveValue::Set(boosting_since),
            stopped_at: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Some(ServerBooster::from_entity(model)))
    }

    /// Closes the user's active booster record.
    ///
    /// # Returns
    /// - `Ok(Some(ServerBooster))`: The closed record
    /// - `Ok(None)`: The user had no active record
    /// - `Err(DbErr)`: Database error
    pub async fn stop(
        &self,
        guild_id: u64,
        user_id: u64,
        at: DateTime<Utc>,
    ) -> Result<Option<ServerBooster>, DbErr> {
        let Some(model) = self.find_active(guild_id, user_id).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.stopped_at = ActiveValue::Set(Some(at));
        active.is_disabled = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(at);

        Ok(Some(ServerBooster::from_entity(active.update(self.db).await?)))
    }

    /// Active boosters of the guild, longest boosting first.
    pub async fn get_active_by_guild(&self, guild_id: u64) -> Result<Vec<ServerBooster>, DbErr> {
        let models = entity::prelude::ServerBooster::find()
            .filter(entity::server_booster::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::server_booster::Column::IsDisabled.eq(false))
            .order_by_asc(entity::server_booster::Column::BoostingSince)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(ServerBooster::from_entity).collect())
    }

    /// Every boosting period of the user in the guild, most recent first.
    pub async fn get_history(&self, guild_id: u64, user_id: u64) -> Result<Vec<ServerBooster>, DbErr> {
        let models = entity::prelude::ServerBooster::find()
            .filter(entity::server_booster::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::server_booster::Column::UserId.eq(to_db(user_id)))
            .order_by_desc(entity::server_booster::Column::BoostingSince)
            .all(self.db)
            .await?;

        Ok(models.into_iter().map(ServerBooster::from_entity).collect())
    }

    async fn find_active(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<entity::server_booster::Model>, DbErr> {
        entity::prelude::ServerBooster::find()
            .filter(entity::server_booster::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::server_booster::Column::UserId.eq(to_db(user_id)))
            .filter(entity::server_booster::Column::IsDisabled.eq(false))
            .one(self.db)
            .await
    }
}
