use super::*;

/// Tests that starting twice keeps a single active record.
///
/// Expected: Ok(Some) the first time, Ok(None) the second
#[tokio::test]
async fn starts_once() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::ServerBooster)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let since = Utc::now() - Duration::days(3);

    let repo = ServerBoosterRepository::new(db);
    let first = repo.start(guild_id, 42, since).await?;
    let second = repo.start(guild_id, 42, Utc::now()).await?;

    assert_eq!(first.map(|b| b.boosting_since), Some(since));
    assert!(second.is_none());
    assert_eq!(repo.get_active_by_guild(guild_id).await?.len(), 1);

    Ok(())
}
