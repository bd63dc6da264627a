use super::*;

/// Tests paging through a guild's active mutes.
///
/// Expected: Ok with page size respected and totals counting only active mutes
#[tokio::test]
async fn pages_active_mutes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;

    for user_id in 1..=5 {
        factory::create_mute(db, guild.guild_id, user_id).await?;
    }
    factory::mute::MuteFactory::new(db, guild.guild_id, 6)
        .disabled(true)
        .build()
        .await?;
    factory::create_mute(db, other.guild_id, 7).await?;

    let repo = MuteRepository::new(db);
    let page = repo
        .get_active_paginated(guild.guild_id as u64, 0, 2)
        .await?;

    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages, 3);

    let last = repo
        .get_active_paginated(guild.guild_id as u64, 2, 2)
        .await?;
    assert_eq!(last.items.len(), 1);

    Ok(())
}
