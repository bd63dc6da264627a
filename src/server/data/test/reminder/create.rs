use super::*;

/// Tests storing a recurring reminder and listing it for its creator.
///
/// Expected: Ok with the cron expression kept and the reminder listed
#[tokio::test]
async fn creates_and_lists_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let set_for = Utc::now() + Duration::hours(3);

    let repo = ReminderRepository::new(db);
    let reminder = repo
        .create(
            guild_id,
            10,
            42,
            "standup".to_string(),
            set_for,
            Some("0 0 9 * * Mon-Fri".to_string()),
        )
        .await?;

    assert!(reminder.is_recurring());
    assert_eq!(reminder.set_for, set_for);

    let listed = repo.get_active_by_creator(guild_id, 42).await?;
    assert_eq!(listed, vec![reminder]);
    assert!(repo.get_active_by_creator(guild_id, 43).await?.is_empty());

    Ok(())
}
