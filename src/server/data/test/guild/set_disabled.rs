use super::*;

/// Tests disabling a guild when the bot leaves it.
///
/// Expected: Ok(Some) with `is_disabled == true`
#[tokio::test]
async fn disables_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = GuildRepository::new(db);
    let result = repo.set_disabled(guild.guild_id as u64, true).await?;

    assert!(result.is_some());
    assert!(result.unwrap().is_disabled);

    Ok(())
}

/// Tests disabling a guild that was never stored.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildRepository::new(db);
    let result = repo.set_disabled(42, true).await?;

    assert!(result.is_none());

    Ok(())
}
