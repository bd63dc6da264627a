//! Server booster factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a booster record; `stopped_at` set means the boost has ended.
pub async fn create_server_booster(
    db: &DatabaseConnection,
    guild_id: i64,
    user_id: i64,
    boosting_since: DateTime<Utc>,
    stopped_at: Option<DateTime<Utc>>,
) -> Result<entity::server_booster::Model, DbErr> {
    let now = Utc::now();
    entity::server_booster::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        user_id: ActiveValue::Set(user_id),
        boosting_since: ActiveValue::Set(boosting_since),
        stopped_at: ActiveValue::Set(stopped_at),
        is_disabled: ActiveValue::Set(stopped_at.is_some()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
