use super::*;

/// Tests stopping a boost and reading the history.
///
/// Expected: the record is closed, history holds both periods newest first
#[tokio::test]
async fn stops_active_boost() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::ServerBooster)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let now = Utc::now();
    factory::create_server_booster(
        db,
        guild.guild_id,
        42,
        now - Duration::days(100),
        Some(now - Duration::days(50)),
    )
    .await?;
    factory::create_server_booster(db, guild.guild_id, 42, now - Duration::days(10), None).await?;

    let repo = ServerBoosterRepository::new(db);
    let stopped = repo.stop(guild.guild_id as u64, 42, now).await?.unwrap();

    assert_eq!(stopped.stopped_at, Some(now));
    assert!(stopped.is_disabled);
    assert!(repo
        .get_active_by_guild(guild.guild_id as u64)
        .await?
        .is_empty());

    let history = repo.get_history(guild.guild_id as u64, 42).await?;
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].id, stopped.id);

    Ok(())
}

/// Tests stopping a member who was not boosting.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_active_boost() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::ServerBooster)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = ServerBoosterRepository::new(db);

    assert!(repo
        .stop(guild.guild_id as u64, 42, Utc::now())
        .await?
        .is_none());

    Ok(())
}
