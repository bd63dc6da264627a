use super::*;

/// Tests replacing a channel's format keeps one row and the original creator.
///
/// Expected: Ok with the new pattern, creator unchanged, editor updated
#[tokio::test]
async fn replaces_pattern_for_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::ChannelMessageFormat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = ChannelMessageFormatRepository::new(db);
    let first = repo
        .upsert(SetMessageFormatParams {
            guild_id,
            channel_id: 10,
            pattern: "^LFG".to_string(),
            moderator_id: 1,
        })
        .await?;
    let second = repo
        .upsert(SetMessageFormatParams {
            guild_id,
            channel_id: 10,
            pattern: "^WTS".to_string(),
            moderator_id: 2,
        })
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.pattern, "^WTS");
    assert_eq!(second.creator_id, 1);
    assert_eq!(second.last_edited_by_id, Some(2));

    Ok(())
}

/// Tests removing and re-adding a format.
///
/// Expected: disable reports true once, upsert re-enables the row
#[tokio::test]
async fn disables_and_reenables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::ChannelMessageFormat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = ChannelMessageFormatRepository::new(db);
    repo.upsert(SetMessageFormatParams {
        guild_id,
        channel_id: 10,
        pattern: "^LFG".to_string(),
        moderator_id: 1,
    })
    .await?;

    assert!(repo.disable(10, 1).await?);
    assert!(!repo.disable(10, 1).await?);
    assert!(repo.find_by_channel_id(10).await?.unwrap().is_disabled);

    let again = repo
        .upsert(SetMessageFormatParams {
            guild_id,
            channel_id: 10,
            pattern: "^LFG".to_string(),
            moderator_id: 1,
        })
        .await?;
    assert!(!again.is_disabled);

    Ok(())
}
