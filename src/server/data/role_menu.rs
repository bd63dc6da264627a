use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    model::role_menu::{AddRoleMenuOptionParams, CreateRoleMenuParams, RoleMenu},
    util::snowflake::to_db,
};

pub struct RoleMenuRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleMenuRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoleMenuParams) -> Result<RoleMenu, DbErr> {
        let now = Utc::now();
        let model = entity::role_menu::ActiveModel {
            guild_id: ActiveValue::Set(to_db(params.guild_id)),
            name: ActiveValue::Set(params.name),
            text: ActiveValue::Set(params.text),
            creator_id: ActiveValue::Set(to_db(params.creator_id)),
            channel_id: ActiveValue::Set(None),
            message_id: ActiveValue::Set(None),
            embed_config_id: ActiveValue::Set(None),
            is_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoleMenu::from_entity(model, Vec::new()))
    }

    /// Finds an active menu by name, with its options.
    pub async fn find_by_name(&self, guild_id: u64, name: &str) -> Result<Option<RoleMenu>, DbErr> {
        let model = entity::prelude::RoleMenu::find()
            .filter(entity::role_menu::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::role_menu::Column::Name.eq(name))
            .filter(entity::role_menu::Column::IsDisabled.eq(false))
            .one(self.db)
            .await?;

        match model {
            Some(model) => Ok(Some(self.with_options(model).await?)),
            None => Ok(None),
        }
    }

    /// Finds an active menu by id, with its options.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<RoleMenu>, DbErr> {
        let model = entity::prelude::RoleMenu::find_by_id(id)
            .filter(entity::role_menu::Column::IsDisabled.eq(false))
            .one(self.db)
            .await?;

        match model {
            Some(model) => Ok(Some(self.with_options(model).await?)),
            None => Ok(None),
        }
    }

    /// Active menus of the guild ordered by name, with their options.
    pub async fn get_by_guild(&self, guild_id: u64) -> Result<Vec<RoleMenu>, DbErr> {
        let menus = entity::prelude::RoleMenu::find()
            .filter(entity::role_menu::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::role_menu::Column::IsDisabled.eq(false))
            .order_by_asc(entity::role_menu::Column::Name)
            .find_with_related(entity::prelude::RoleMenuOption)
            .all(self.db)
            .await?;

        Ok(menus
            .into_iter()
            .map(|(menu, options)| RoleMenu::from_entity(menu, options))
            .collect())
    }

    pub async fn add_option(
        &self,
        menu_id: i32,
        params: AddRoleMenuOptionParams,
    ) -> Result<(), DbErr> {
        entity::role_menu_option::ActiveModel {
            role_menu_id: ActiveValue::Set(menu_id),
            role_id: ActiveValue::Set(to_db(params.role_id)),
            label: ActiveValue::Set(params.label),
            emoji: ActiveValue::Set(params.emoji),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes the option for `role_id`. Returns whether an option was removed.
    pub async fn remove_option(&self, menu_id: i32, role_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::RoleMenuOption::delete_many()
            .filter(entity::role_menu_option::Column::RoleMenuId.eq(menu_id))
            .filter(entity::role_menu_option::Column::RoleId.eq(to_db(role_id)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Records where the menu was posted.
    pub async fn set_message(&self, id: i32, channel_id: u64, message_id: u64) -> Result<(), DbErr> {
        self.update(id, |menu| {
            menu.channel_id = ActiveValue::Set(Some(to_db(channel_id)));
            menu.message_id = ActiveValue::Set(Some(to_db(message_id)));
        })
        .await
    }

    pub async fn set_embed_config(&self, id: i32, embed_config_id: Option<i32>) -> Result<(), DbErr> {
        self.update(id, |menu| {
            menu.embed_config_id = ActiveValue::Set(embed_config_id);
        })
        .await
    }

    pub async fn disable(&self, id: i32) -> Result<(), DbErr> {
        self.update(id, |menu| {
            menu.is_disabled = ActiveValue::Set(true);
        })
        .await
    }

    async fn with_options(&self, model: entity::role_menu::Model) -> Result<RoleMenu, DbErr> {
        let options = entity::prelude::RoleMenuOption::find()
            .filter(entity::role_menu_option::Column::RoleMenuId.eq(model.id))
            .order_by_asc(entity::role_menu_option::Column::Id)
            .all(self.db)
            .await?;

        Ok(RoleMenu::from_entity(model, options))
    }

    async fn update(
        &self,
        id: i32,
        apply: impl FnOnce(&mut entity::role_menu::ActiveModel),
    ) -> Result<(), DbErr> {
        let Some(model) = entity::prelude::RoleMenu::find_by_id(id).one(self.db).await? else {
            return Err(DbErr::RecordNotFound(format!("role_menu {}", id)));
        };

        let mut active = model.into_active_model();
        apply(&mut active);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }
}
