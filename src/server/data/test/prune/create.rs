use super::*;

/// Tests recording a prune and reading it back.
///
/// Expected: Ok with requested and deleted counts stored separately
#[tokio::test]
async fn records_prune() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = PruneRepository::new(db);
    let prune = repo
        .create(CreatePruneParams {
            guild_id,
            channel_id: 10,
            moderator_id: 20,
            target_user_id: Some(30),
            requested_count: 50,
            deleted_count: 12,
        })
        .await?;

    assert_eq!(prune.requested_count, 50);
    assert_eq!(prune.deleted_count, 12);
    assert_eq!(prune.target_user_id, Some(30));

    let stored = entity::prelude::Prune::find_by_id(prune.id).one(db).await?.unwrap();
    assert_eq!(stored.guild_id, guild.guild_id);
    assert_eq!(stored.deleted_count, 12);

    Ok(())
}
