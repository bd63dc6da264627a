use super::*;

/// Tests that entries are returned newest first and scoped to the guild.
///
/// Expected: Ok with the guild's two entries, latest action first
#[tokio::test]
async fn returns_guild_entries_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let repo = AuditLogRepository::new(db);
    for (guild_id, action) in [
        (guild_id, AuditAction::Mute),
        (other.guild_id as u64, AuditAction::Ban),
        (guild_id, AuditAction::Unmute),
    ] {
        repo.create(CreateAuditLogParams {
            guild_id,
            actor_id: 1,
            target_id: Some(2),
            action,
            details: None,
        })
        .await?;
    }

    let page = repo.get_paginated_by_guild(guild_id, 0, 10).await?;

    let actions: Vec<String> = page.items.into_iter().map(|e| e.action).collect();
    assert_eq!(actions, vec!["unmute".to_string(), "mute".to_string()]);
    assert_eq!(page.total, 2);

    Ok(())
}
