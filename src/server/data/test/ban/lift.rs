use super::*;

/// Tests unbanning a banned user.
///
/// Expected: Ok(Some) and no active ban afterwards
#[tokio::test]
async fn lifts_active_ban() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_ban(db, guild.guild_id, 42).await?;

    let repo = BanRepository::new(db);
    let lifted = repo
        .lift(LiftPunishmentParams {
            guild_id: guild.guild_id as u64,
            user_id: 42,
            lifted_by_id: 901,
            reason: None,
        })
        .await?;

    assert_eq!(lifted.map(|b| b.lifted_by_id), Some(Some(901)));
    assert!(repo.get_active(guild.guild_id as u64, 42).await?.is_none());

    Ok(())
}
