use super::*;

/// Tests creating a ticket.
///
/// Expected: Ok with an open ticket, no added members and activity set to creation time
#[tokio::test]
async fn creates_open_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;

    let repo = TicketRepository::new(db);
    let ticket = repo
        .create(CreateTicketParams {
            guild_id: guild.guild_id as u64,
            number: 1,
            user_id: 42,
            channel_id: 777,
            welcome_message_id: None,
        })
        .await?;

    assert_eq!(ticket.number, 1);
    assert_eq!(ticket.channel_id, 777);
    assert_eq!(ticket.state(), TicketState::Open);
    assert!(ticket.added_user_ids.is_empty());

    let found = repo.find_by_channel_id(777).await?;
    assert_eq!(found, Some(ticket));

    Ok(())
}
