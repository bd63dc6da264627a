use super::*;

/// Tests creating a moderation config for a guild without one.
///
/// Expected: Ok with the given fields set and the others empty
#[tokio::test]
async fn creates_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = ModerationConfigRepository::new(db);
    let config = repo
        .upsert(UpsertModerationConfigParams {
            guild_id,
            mute_role_id: Some(111),
            ..Default::default()
        })
        .await?;

    assert_eq!(config.guild_id, guild_id);
    assert_eq!(config.mute_role_id, Some(111));
    assert_eq!(config.moderation_log_channel_id, None);
    assert!(!config.is_disabled);

    Ok(())
}

/// Tests that fields left `None` keep their stored values.
///
/// Expected: Ok with the earlier mute role and the new log channel
#[tokio::test]
async fn keeps_unset_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = ModerationConfigRepository::new(db);
    repo.upsert(UpsertModerationConfigParams {
        guild_id,
        mute_role_id: Some(111),
        ..Default::default()
    })
    .await?;
    let config = repo
        .upsert(UpsertModerationConfigParams {
            guild_id,
            moderation_log_channel_id: Some(222),
            ..Default::default()
        })
        .await?;

    assert_eq!(config.mute_role_id, Some(111));
    assert_eq!(config.moderation_log_channel_id, Some(222));

    let stored = repo.get_by_guild_id(guild_id).await?.unwrap();
    assert_eq!(stored, config);

    Ok(())
}

/// Tests that a disabled config hides its log channel.
///
/// Expected: `log_channel()` is `None` once disabled
#[tokio::test]
async fn disabled_config_has_no_log_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = ModerationConfigRepository::new(db);
    let config = repo
        .upsert(UpsertModerationConfigParams {
            guild_id: guild.guild_id as u64,
            moderation_log_channel_id: Some(222),
            is_disabled: Some(true),
            ..Default::default()
        })
        .await?;

    assert_eq!(config.moderation_log_channel_id, Some(222));
    assert_eq!(config.log_channel(), None);

    Ok(())
}
