use super::*;

/// Tests adding and removing options.
///
/// Expected: options listed in insertion order; removing an unknown role returns false
#[tokio::test]
async fn adds_and_removes_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let menu = factory::create_role_menu(db, guild.guild_id).await?;

    let repo = RoleMenuRepository::new(db);
    for (role_id, label) in [(100, "Red"), (200, "Blue")] {
        repo.add_option(
            menu.id,
            AddRoleMenuOptionParams {
                guild_id: guild.guild_id as u64,
                menu_name: menu.name.clone(),
                role_id,
                label: label.to_string(),
                emoji: None,
                description: None,
            },
        )
        .await?;
    }

    let stored = repo.get_by_id(menu.id).await?.unwrap();
    assert_eq!(stored.role_ids(), vec![100, 200]);
    assert_eq!(stored.options[0].label, "Red");

    assert!(repo.remove_option(menu.id, 100).await?);
    assert!(!repo.remove_option(menu.id, 300).await?);

    let stored = repo.get_by_id(menu.id).await?.unwrap();
    assert_eq!(stored.role_ids(), vec![200]);

    Ok(())
}

/// Tests listing a guild's menus with their options.
///
/// Expected: Ok with both menus and the option attached to the right one
#[tokio::test]
async fn lists_menus_with_options() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_role_menu_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let first = factory::create_role_menu(db, guild.guild_id).await?;
    factory::create_role_menu(db, guild.guild_id).await?;
    factory::create_role_menu_option(db, first.id, 100).await?;

    let repo = RoleMenuRepository::new(db);
    let menus = repo.get_by_guild(guild.guild_id as u64).await?;

    assert_eq!(menus.len(), 2);
    let with_option = menus.iter().find(|m| m.id == first.id).unwrap();
    assert_eq!(with_option.role_ids(), vec![100]);

    Ok(())
}
