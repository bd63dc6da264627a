use super::*;

/// Tests finding closed tickets old enough to delete.
///
/// Expected: Ok with only the ticket closed before the cutoff
#[tokio::test]
async fn returns_stale_closed_tickets() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let now = Utc::now();

    let stale = factory::ticket::TicketFactory::new(db, guild.guild_id, 1)
        .closed_on(Some(now - Duration::days(3)))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 2)
        .closed_on(Some(now - Duration::hours(1)))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 3)
        .closed_on(Some(now - Duration::days(3)))
        .disabled(true)
        .build()
        .await?;
    factory::create_ticket(db, guild.guild_id, 4).await?;

    let repo = TicketRepository::new(db);
    let result = repo
        .get_closed_before(guild.guild_id as u64, now - Duration::days(1))
        .await?;

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].id, stale.id);

    Ok(())
}
