use super::*;

/// Tests that expired bans are found and future or indefinite ones are not.
///
/// Expected: Ok with just the expired ban
#[tokio::test]
async fn returns_expired_bans() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let now = Utc::now();

    let expired = factory::ban::BanFactory::new(db, guild.guild_id, 1)
        .applied_until(Some(now - Duration::seconds(30)))
        .build()
        .await?;
    factory::create_ban(db, guild.guild_id, 2).await?;
    factory::ban::BanFactory::new(db, guild.guild_id, 3)
        .applied_until(None)
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let result = repo.get_expired(now).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, expired.id);
    assert_eq!(result[0].user_id, 1);

    Ok(())
}
