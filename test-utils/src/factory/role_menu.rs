//! Role menu and role menu option factories.

use crate::factory::helpers::{next_id, next_snowflake};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active role menu named `menu-{id}`.
pub async fn create_role_menu(
    db: &DatabaseConnection,
    guild_id: i64,
) -> Result<entity::role_menu::Model, DbErr> {
    let now = Utc::now();
    entity::role_menu::ActiveModel {
        guild_id: ActiveValue::Set(guild_id),
        name: ActiveValue::Set(format!("menu-{}", next_id())),
        text: ActiveValue::Set("Pick your roles".to_string()),
        creator_id: ActiveValue::Set(next_snowflake()),
        channel_id: ActiveValue::Set(None),
        message_id: ActiveValue::Set(None),
        embed_config_id: ActiveValue::Set(None),
        is_disabled: ActiveValue::Set(false),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Adds an option for `role_id` to a role menu, labelled `Role {id}`.
pub async fn create_role_menu_option(
    db: &DatabaseConnection,
    role_menu_id: i32,
    role_id: i64,
) -> Result<entity::role_menu_option::Model, DbErr> {
    entity::role_menu_option::ActiveModel {
        role_menu_id: ActiveValue::Set(role_menu_id),
        role_id: ActiveValue::Set(role_id),
        label: ActiveValue::Set(format!("Role {}", next_id())),
        emoji: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
