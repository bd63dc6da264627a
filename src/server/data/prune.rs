use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::{
    model::prune::{CreatePruneParams, Prune},
    util::snowflake::to_db,
};

pub struct PruneRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PruneRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePruneParams) -> Result<Prune, DbErr> {
        let model = entity::prune::ActiveModel {
            guild_id: ActiveValue::Set(to_db(params.guild_id)),
            channel_id: ActiveValue::Set(to_db(params.channel_id)),
            moderator_id: ActiveValue::Set(to_db(params.moderator_id)),
            target_user_id: ActiveValue::Set(params.target_user_id.map(to_db)),
            requested_count: ActiveValue::Set(params.requested_count),
            deleted_count: ActiveValue::Set(params.deleted_count),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Prune::from_entity(model))
    }
}
