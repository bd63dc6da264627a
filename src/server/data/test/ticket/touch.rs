use super::*;

/// Tests recording activity in an open ticket.
///
/// Expected: Ok(true) and `last_activity_at` updated
#[tokio::test]
async fn updates_last_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let ticket = factory::ticket::TicketFactory::new(db, guild.guild_id, 42)
        .last_activity_at(Utc::now() - Duration::days(3))
        .build()
        .await?;
    let at = Utc::now();

    let repo = TicketRepository::new(db);
    let touched = repo.touch(ticket.channel_id as u64, at).await?;

    assert!(touched);
    let found = repo
        .find_by_channel_id(ticket.channel_id as u64)
        .await?
        .unwrap();
    assert_eq!(found.last_activity_at, at);

    Ok(())
}

/// Tests that closed tickets and unrelated channels are not touched.
///
/// Expected: Ok(false) for both
#[tokio::test]
async fn ignores_closed_tickets_and_other_channels() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let closed = factory::ticket::TicketFactory::new(db, guild.guild_id, 42)
        .closed_on(Some(Utc::now()))
        .build()
        .await?;

    let repo = TicketRepository::new(db);

    assert!(!repo.touch(closed.channel_id as u64, Utc::now()).await?);
    assert!(!repo.touch(1, Utc::now()).await?);

    Ok(())
}
