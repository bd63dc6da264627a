use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        tag::{CreateTagParams, EditTagParams, Tag},
        Paginated,
    },
    util::snowflake::to_db,
};

pub struct TagRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTagParams) -> Result<Tag, DbErr> {
        let now = Utc::now();
        let model = entity::tag::ActiveModel {
            guild_id: ActiveValue::Set(to_db(params.guild_id)),
            name: ActiveValue::Set(params.name),
            text: ActiveValue::Set(params.text),
            embed_config_id: ActiveValue::Set(params.embed_config_id),
            creator_id: ActiveValue::Set(to_db(params.creator_id)),
            last_edited_by_id: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Tag::from_entity(model))
    }

    /// Finds an active tag by name.
    pub async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<Tag>, DbErr> {
        Ok(self
            .find_model(guild_id, name)
            .await?
            .map(Tag::from_entity))
    }

    /// Replaces the tag's text.
    ///
    /// # Returns
    /// - `Ok(Some(Tag))`: The edited tag
    /// - `Ok(None)`: No active tag with that name
    /// - `Err(DbErr)`: Database error
    pub async fn edit(&self, params: EditTagParams) -> Result<Option<Tag>, DbErr> {
        let Some(model) = self.find_model(params.guild_id, &params.name).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.text = ActiveValue::Set(params.text);
        active.last_edited_by_id = ActiveValue::Set(Some(to_db(params.editor_id)));
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Tag::from_entity(active.update(self.db).await?)))
    }

    /// Soft-deletes the tag, freeing its name.
    pub async fn disable(&self, guild_id: u64, name: &str) -> Result<Option<Tag>, DbErr> {
        let Some(model) = self.find_model(guild_id, name).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        active.is_disabled = ActiveValue::Set(true);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ok(Some(Tag::from_entity(active.update(self.db).await?)))
    }

    /// Gets a page of the guild's active tags ordered by name.
    pub async fn get_paginated_by_guild(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Tag>, DbErr> {
        let paginator = entity::prelude::Tag::find()
            .filter(entity::tag::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::tag::Column::IsDisabled.eq(false))
            .order_by_asc(entity::tag::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tags = paginator.fetch_page(page).await?;

        Ok(Paginated::new(
            tags.into_iter().map(Tag::from_entity).collect(),
            total,
            page,
            per_page,
        ))
    }

    async fn find_model(&self, guild_id: u64, name: &str) -> Result<Option<entity::tag::Model>, DbErr> {
        entity::prelude::Tag::find()
            .filter(entity::tag::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::tag::Column::Name.eq(name))
            .filter(entity::tag::Column::IsDisabled.eq(false))
            .one(self.db)
            .await
    }
}
