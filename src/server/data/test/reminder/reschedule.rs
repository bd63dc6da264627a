use super::*;

/// Tests moving a reminder forward and disabling another.
///
/// Expected: rescheduled reminder no longer due, disabled reminder gone from the list
#[tokio::test]
async fn reschedules_and_disables() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Reminder)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let now = Utc::now();

    let recurring = factory::reminder::ReminderFactory::new(db, guild.guild_id, 1)
        .set_for(now - Duration::seconds(5))
        .cron_expression(Some("0 * * * * *".to_string()))
        .build()
        .await?;
    let once = factory::reminder::ReminderFactory::new(db, guild.guild_id, 1)
        .set_for(now - Duration::seconds(5))
        .build()
        .await?;

    let repo = ReminderRepository::new(db);
    let next = now + Duration::minutes(1);
    let moved = repo.reschedule(recurring.id, next).await?.unwrap();
    repo.disable(once.id).await?;

    assert_eq!(moved.set_for, next);
    assert!(repo.get_due(now).await?.is_empty());
    assert!(repo.get_by_id(once.id).await?.unwrap().is_disabled);

    Ok(())
}
