use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::role_menu::{AddRoleMenuOptionParams, CreateRoleMenuParams, MAX_OPTIONS},
    service::role_menu::RoleMenuService,
};
use test_utils::{builder::TestBuilder, factory};

fn service(db: &sea_orm::DatabaseConnection) -> RoleMenuService<'_> {
    RoleMenuService::new(db, Arc::new(Http::new("")))
}

fn option_params(guild_id: u64, menu_name: &str, role_id: u64) -> AddRoleMenuOptionParams {
    AddRoleMenuOptionParams {
        guild_id,
        menu_name: menu_name.to_string(),
        role_id,
        label: "Announcements".to_string(),
        emoji: None,
        description: None,
    }
}

/// Expected: Err(Conflict) when a guild already has a menu with the name
#[tokio::test]
async fn rejects_duplicate_menu_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let menu = factory::create_role_menu(db, guild.guild_id).await?;

    let result = service(db)
        .create(CreateRoleMenuParams {
            guild_id: guild.guild_id as u64,
            name: format!(" {} ", menu.name),
            text: "Pick".to_string(),
            creator_id: 1,
        })
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests adding a role to a menu that is already full.
///
/// Expected: Err(BadRequest) and the option count unchanged
#[tokio::test]
async fn caps_options_per_menu() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let menu = factory::create_role_menu(db, guild.guild_id).await?;
    for role_id in 0..MAX_OPTIONS as i64 {
        factory::create_role_menu_option(db, menu.id, 500 + role_id).await?;
    }

    let service = service(db);
    let result = service
        .add_option(option_params(guild.guild_id as u64, &menu.name, 999))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(
        service.list(guild.guild_id as u64).await?[0].options.len(),
        MAX_OPTIONS
    );

    Ok(())
}

/// Expected: Err(Conflict) when the role is already an option of the menu
#[tokio::test]
async fn rejects_duplicate_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let menu = factory::create_role_menu(db, guild.guild_id).await?;
    factory::create_role_menu_option(db, menu.id, 500).await?;

    let result = service(db)
        .add_option(option_params(guild.guild_id as u64, &menu.name, 500))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}
