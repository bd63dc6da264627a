use super::*;

/// Expected: Ok with the configured mute role
#[tokio::test]
async fn returns_mute_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, stored) = factory::helpers::create_guild_with_mute_role(db).await?;

    let repo = ModerationConfigRepository::new(db);
    let config = repo.get_by_guild_id(guild.guild_id as u64).await?.unwrap();

    assert_eq!(config.mute_role_id, stored.mute_role_id.map(|id| id as u64));

    Ok(())
}

/// Expected: Ok(None) for a guild that was never configured
#[tokio::test]
async fn unconfigured_guild_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = ModerationConfigRepository::new(db);

    assert!(repo.get_by_guild_id(guild.guild_id as u64).await?.is_none());

    Ok(())
}
