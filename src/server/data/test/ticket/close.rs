use super::*;

/// Tests closing and reopening a ticket.
///
/// Expected: closing sets closer and time; reopening clears `closed_on` and records who
/// reopened it
#[tokio::test]
async fn closes_and_reopens_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let ticket = factory::create_ticket(db, guild.guild_id, 42).await?;

    let repo = TicketRepository::new(db);
    let closed = repo.close(ticket.id, 900, Utc::now()).await?.unwrap();

    assert_eq!(closed.state(), TicketState::Closed);
    assert_eq!(closed.closed_by_id, Some(900));

    let reopened = repo.reopen(ticket.id, 901, Utc::now()).await?.unwrap();

    assert_eq!(reopened.state(), TicketState::Open);
    assert_eq!(reopened.closed_on, None);
    assert_eq!(reopened.reopened_by_id, Some(901));
    assert!(reopened.reopened_on.is_some());

    Ok(())
}

/// Tests soft-deleting a ticket.
///
/// Expected: Ok(Some) in state `Deleted`, still findable by channel
#[tokio::test]
async fn disables_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let ticket = factory::create_ticket(db, guild.guild_id, 42).await?;

    let repo = TicketRepository::new(db);
    repo.disable(ticket.id).await?;

    let found = repo
        .find_by_channel_id(ticket.channel_id as u64)
        .await?
        .unwrap();
    assert_eq!(found.state(), TicketState::Deleted);

    Ok(())
}
