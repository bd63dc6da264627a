use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    model::message_format::{ChannelMessageFormat, SetMessageFormatParams},
    util::snowflake::to_db,
};

pub struct ChannelMessageFormatRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ChannelMessageFormatRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Sets the channel's format, re-enabling a previously removed one.
    ///
    /// On conflict the original creator is kept and the moderator is recorded as editor.
    pub async fn upsert(&self, params: SetMessageFormatParams) -> Result<ChannelMessageFormat, DbErr> {
        let now = Utc::now();
        let model = entity::prelude::ChannelMessageFormat::insert(
            entity::channel_message_format::ActiveModel {
                guild_id: ActiveValue::Set(to_db(params.guild_id)),
                channel_id: ActiveValue::Set(to_db(params.channel_id)),
                pattern: ActiveValue::Set(params.pattern),
                creator_id: ActiveValue::Set(to_db(params.moderator_id)),
                last_edited_by_id: ActiveValue::Set(Some(to_db(params.moderator_id))),
                is_disabled: ActiveValue::Set(false),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::channel_message_format::Column::ChannelId)
                .update_columns([
                    entity::channel_message_format::Column::Pattern,
                    entity::channel_message_format::Column::LastEditedById,
                    entity::channel_message_format::Column::IsDisabled,
                    entity::channel_message_format::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ChannelMessageFormat::from_entity(model))
    }

    /// Gets the channel's format, including a disabled one.
    pub async fn find_by_channel_id(
        &self,
        channel_id: u64,
    ) -> Result<Option<ChannelMessageFormat>, DbErr> {
        let model = entity::prelude::ChannelMessageFormat::find()
            .filter(entity::channel_message_format::Column::ChannelId.eq(to_db(channel_id)))
            .one(self.db)
            .await?;

        Ok(model.map(ChannelMessageFormat::from_entity))
    }

    /// Stops enforcing the channel's format. Returns whether an active format existed.
    pub async fn disable(&self, channel_id: u64, moderator_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::ChannelMessageFormat::update_many()
            .set(entity::channel_message_format::ActiveModel {
                is_disabled: ActiveValue::Set(true),
                last_edited_by_id: ActiveValue::Set(Some(to_db(moderator_id))),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::channel_message_format::Column::ChannelId.eq(to_db(channel_id)))
            .filter(entity::channel_message_format::Column::IsDisabled.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
