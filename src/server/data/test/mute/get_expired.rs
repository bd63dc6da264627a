use super::*;

/// Tests that only active mutes past their end are returned.
///
/// Expected: Ok with just the expired mute
#[tokio::test]
async fn returns_only_expired_active_mutes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let now = Utc::now();

    let expired = factory::mute::MuteFactory::new(db, guild.guild_id, 1)
        .applied_until(Some(now - Duration::minutes(1)))
        .build()
        .await?;
    factory::mute::MuteFactory::new(db, guild.guild_id, 2)
        .applied_until(Some(now + Duration::minutes(10)))
        .build()
        .await?;
    factory::mute::MuteFactory::new(db, guild.guild_id, 3)
        .applied_until(None)
        .build()
        .await?;
    factory::mute::MuteFactory::new(db, guild.guild_id, 4)
        .applied_until(Some(now - Duration::minutes(1)))
        .disabled(true)
        .build()
        .await?;

    let repo = MuteRepository::new(db);
    let result = repo.get_expired(now).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, expired.id);

    Ok(())
}
