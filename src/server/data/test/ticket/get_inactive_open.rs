use super::*;

/// Tests finding open tickets idle since before the cutoff.
///
/// Expected: Ok with only the idle open ticket
#[tokio::test]
async fn returns_idle_open_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let now = Utc::now();

    let idle = factory::ticket::TicketFactory::new(db, guild.guild_id, 1)
        .last_activity_at(now - Duration::days(2))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 2)
        .last_activity_at(now - Duration::minutes(5))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 3)
        .last_activity_at(now - Duration::days(2))
        .closed_on(Some(now - Duration::days(1)))
        .build()
        .await?;

    let repo = TicketRepository::new(db);
    let result = repo
        .get_inactive_open(guild.guild_id as u64, now - Duration::days(1))
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, idle.id);

    Ok(())
}
