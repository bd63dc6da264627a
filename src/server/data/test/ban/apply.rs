use super::*;

/// Tests banning a user twice with a later end.
///
/// Expected: Ok with `Created` then `Extended` on the same record
#[tokio::test]
async fn creates_then_extends_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let repo = BanRepository::new(db);

    let first = repo
        .apply(ApplyPunishmentParams {
            guild_id: guild.guild_id as u64,
            user_id: 42,
            moderator_id: 900,
            applied_until: Some(Utc::now() + Duration::days(1)),
            reason: None,
        })
        .await?;
    let second = repo
        .apply(ApplyPunishmentParams {
            guild_id: guild.guild_id as u64,
            user_id: 42,
            moderator_id: 901,
            applied_until: Some(Utc::now() + Duration::days(7)),
            reason: Some("repeat offence".to_string()),
        })
        .await?;

    assert_eq!(first.outcome, ApplyOutcome::Created);
    assert_eq!(second.outcome, ApplyOutcome::Extended);
    assert_eq!(first.punishment.id, second.punishment.id);
    assert_eq!(second.punishment.reason, Some("repeat offence".to_string()));
    assert_eq!(entity::prelude::Ban::find().count(db).await?, 1);

    Ok(())
}

/// Tests a shorter ban against an indefinite one.
///
/// Expected: Ok with `AlreadyLonger`
#[tokio::test]
async fn keeps_indefinite_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::ban::BanFactory::new(db, guild.guild_id, 42)
        .applied_until(None)
        .build()
        .await?;

    let repo = BanRepository::new(db);
    let result = repo
        .apply(ApplyPunishmentParams {
            guild_id: guild.guild_id as u64,
            user_id: 42,
            moderator_id: 900,
            applied_until: Some(Utc::now() + Duration::days(1)),
            reason: None,
        })
        .await?;

    assert_eq!(result.outcome, ApplyOutcome::AlreadyLonger);
    assert_eq!(result.punishment.applied_until, None);

    Ok(())
}
