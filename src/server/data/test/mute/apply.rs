use super::*;

/// Tests muting a user without an active mute.
///
/// Expected: Ok with outcome `Created` and an active record
#[tokio::test]
async fn creates_mute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let until = Utc::now() + Duration::hours(1);

    let repo = MuteRepository::new(db);
    let result = repo.apply(params(guild.guild_id, 42, Some(until))).await?;

    assert_eq!(result.outcome, ApplyOutcome::Created);
    assert_eq!(result.punishment.user_id, 42);
    assert_eq!(result.punishment.applied_by_id, 900);
    assert_eq!(result.punishment.applied_until, Some(until));
    assert!(result.punishment.is_active());

    Ok(())
}

/// Tests muting an already muted user with a later end.
///
/// Verifies the existing record is extended instead of a second one being created.
///
/// Expected: Ok with outcome `Extended`, same id, one row in the table
#[tokio::test]
async fn extends_existing_mute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let existing = factory::create_mute(db, guild.guild_id, 42).await?;
    let later = Utc::now() + Duration::days(2);

    let repo = MuteRepository::new(db);
    let result = repo.apply(params(guild.guild_id, 42, Some(later))).await?;

    assert_eq!(result.outcome, ApplyOutcome::Extended);
    assert_eq!(result.punishment.id, existing.id);
    assert_eq!(result.punishment.applied_until, Some(later));
    assert_eq!(result.punishment.applied_by_id, 900);
    assert_eq!(entity::prelude::Mute::find().count(db).await?, 1);

    Ok(())
}

/// Tests that an indefinite mute extends a timed one.
///
/// Expected: Ok with outcome `Extended` and no end
#[tokio::test]
async fn indefinite_extends_timed_mute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_mute(db, guild.guild_id, 42).await?;

    let repo = MuteRepository::new(db);
    let result = repo.apply(params(guild.guild_id, 42, None)).await?;

    assert_eq!(result.outcome, ApplyOutcome::Extended);
    assert_eq!(result.punishment.applied_until, None);

    Ok(())
}

/// Tests muting with an earlier end than the active mute.
///
/// Expected: Ok with outcome `AlreadyLonger` and the record untouched
#[tokio::test]
async fn leaves_longer_mute_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let existing = factory::mute::MuteFactory::new(db, guild.guild_id, 42)
        .applied_until(None)
        .build()
        .await?;

    let repo = MuteRepository::new(db);
    let result = repo
        .apply(params(guild.guild_id, 42, Some(Utc::now() + Duration::minutes(5))))
        .await?;

    assert_eq!(result.outcome, ApplyOutcome::AlreadyLonger);
    assert_eq!(result.punishment.applied_until, None);
    assert_eq!(result.punishment.applied_by_id, existing.applied_by_id as u64);
    assert_eq!(entity::prelude::Mute::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a lifted mute does not count as active.
///
/// Expected: Ok with outcome `Created` and a second row
#[tokio::test]
async fn ignores_lifted_mute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::mute::MuteFactory::new(db, guild.guild_id, 42)
        .disabled(true)
        .build()
        .await?;

    let repo = MuteRepository::new(db);
    let result = repo
        .apply(params(guild.guild_id, 42, Some(Utc::now() + Duration::hours(1))))
        .await?;

    assert_eq!(result.outcome, ApplyOutcome::Created);
    assert_eq!(entity::prelude::Mute::find().count(db).await?, 2);

    Ok(())
}
