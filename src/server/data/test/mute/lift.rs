use super::*;

/// Tests lifting an active mute.
///
/// Expected: Ok(Some) with lift details set and the record disabled
#[tokio::test]
async fn lifts_active_mute() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_mute(db, guild.guild_id, 42).await?;

    let repo = MuteRepository::new(db);
    let lifted = repo
        .lift(LiftPunishmentParams {
            guild_id: guild.guild_id as u64,
            user_id: 42,
            lifted_by_id: 901,
            reason: Some("appeal".to_string()),
        })
        .await?;

    assert!(lifted.is_some());
    let lifted = lifted.unwrap();
    assert_eq!(lifted.lifted_by_id, Some(901));
    assert!(lifted.lifted_on.is_some());
    assert_eq!(lifted.lift_reason, Some("appeal".to_string()));
    assert!(!lifted.is_active());
    assert!(repo.get_active(guild.guild_id as u64, 42).await?.is_none());

    Ok(())
}

/// Tests lifting when the user is not muted.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_not_muted() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = MuteRepository::new(db);
    let lifted = repo
        .lift(LiftPunishmentParams {
            guild_id: guild.guild_id as u64,
            user_id: 42,
            lifted_by_id: 901,
            reason: None,
        })
        .await?;

    assert!(lifted.is_none());

    Ok(())
}
