use super::*;

/// Tests that only active reminders at or before now are due.
///
/// Expected: Ok with the past reminder only
#[tokio::test]
async fn returns_due_reminders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let now = Utc::now();

    let due = factory::reminder::ReminderFactory::new(db, guild.guild_id, 1)
        .set_for(now - Duration::seconds(10))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, guild.guild_id, 1)
        .set_for(now + Duration::minutes(10))
        .build()
        .await?;
    factory::reminder::ReminderFactory::new(db, guild.guild_id, 1)
        .set_for(now - Duration::minutes(10))
        .disabled(true)
        .build()
        .await?;

    let repo = ReminderRepository::new(db);
    let result = repo.get_due(now).await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, due.id);

    Ok(())
}

/// Expected: A reminder becomes due once its time has passed
#[tokio::test]
async fn future_reminder_becomes_due() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let reminder = factory::create_reminder(db, guild.guild_id, 1).await?;

    let repo = ReminderRepository::new(db);

    assert!(repo.get_due(Utc::now()).await?.is_empty());

    let later = repo.get_due(reminder.set_for + Duration::seconds(1)).await?;
    assert_eq!(later.len(), 1);
    assert_eq!(later[0].id, reminder.id);

    Ok(())
}
