use super::*;

/// Tests inserting a guild the bot just joined.
///
/// Expected: Ok with an enabled guild carrying the given name
#[tokio::test]
async fn inserts_new_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let guild = repo.upsert(123456789, "Test Guild".to_string()).await?;

    assert_eq!(guild.guild_id, 123456789);
    assert_eq!(guild.name, "Test Guild");
    assert!(!guild.is_disabled);

    Ok(())
}

/// Tests that rejoining a guild refreshes its name and re-enables it.
///
/// Expected: Ok with the same row, new name, `is_disabled == false`
#[tokio::test]
async fn reenables_and_renames_existing_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::guild::GuildFactory::new(db)
        .name("Old Name")
        .disabled(true)
        .build()
        .await?;

    let repo = GuildRepository::new(db);
    let guild = repo
        .upsert(existing.guild_id as u64, "New Name".to_string())
        .await?;

    assert_eq!(guild.id, existing.id);
    assert_eq!(guild.name, "New Name");
    assert!(!guild.is_disabled);

    Ok(())
}

/// Tests that snowflakes above `i64::MAX` survive storage.
///
/// Expected: Ok with the original `u64` id
#[tokio::test]
async fn preserves_large_snowflakes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    repo.upsert(u64::MAX - 1, "Big".to_string()).await?;

    let found = repo.find_by_guild_id(u64::MAX - 1).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().guild_id, u64::MAX - 1);

    Ok(())
}
