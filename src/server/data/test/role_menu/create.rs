use super::*;

/// Tests creating a menu and finding it by name.
///
/// Expected: Ok with an empty option list and the custom id derived from the row id
#[tokio::test]
async fn creates_and_finds_menu() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = RoleMenuRepository::new(db);
    let menu = repo
        .create(CreateRoleMenuParams {
            guild_id,
            name: "colours".to_string(),
            text: "Pick a colour".to_string(),
            creator_id: 42,
        })
        .await?;

    assert!(menu.options.is_empty());
    assert_eq!(menu.custom_id(), format!("rolemenu:{}", menu.id));

    let found = repo.find_by_name(guild_id, "colours").await?;
    assert_eq!(found.map(|m| m.id), Some(menu.id));

    Ok(())
}

/// Tests that a disabled menu no longer resolves by name.
///
/// Expected: Ok(None) after disabling
#[tokio::test]
async fn disabled_menu_is_hidden() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let menu = factory::create_role_menu(db, guild.guild_id).await?;

    let repo = RoleMenuRepository::new(db);
    repo.disable(menu.id).await?;

    assert!(repo
        .find_by_name(guild.guild_id as u64, &menu.name)
        .await?
        .is_none());
    assert!(repo.get_by_id(menu.id).await?.is_none());

    Ok(())
}
