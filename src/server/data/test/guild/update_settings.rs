use super::*;

/// Tests setting the embed colour and reminder channel.
///
/// Expected: Ok with both values stored
#[tokio::test]
async fn stores_embed_color_and_reminder_channel() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = GuildRepository::new(db);
    repo.set_embed_color(guild_id, Some("#FF8800".to_string()))
        .await?;
    repo.set_reminder_channel(guild_id, Some(555)).await?;

    let stored = repo.find_by_guild_id(guild_id).await?.unwrap();
    assert_eq!(stored.embed_color, Some("#FF8800".to_string()));
    assert_eq!(stored.reminder_channel_id, Some(555));

    Ok(())
}
