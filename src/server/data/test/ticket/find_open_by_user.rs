use super::*;

/// Tests finding a user's open ticket while ignoring closed and deleted ones.
///
/// Expected: Ok(Some) with the open ticket
#[tokio::test]
async fn finds_only_open_ticket() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 42)
        .closed_on(Some(Utc::now()))
        .build()
        .await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 42)
        .disabled(true)
        .build()
        .await?;
    let open = factory::create_ticket(db, guild.guild_id, 42).await?;

    let repo = TicketRepository::new(db);
    let found = repo.find_open_by_user(guild.guild_id as u64, 42).await?;

    assert_eq!(found.map(|t| t.id), Some(open.id));

    Ok(())
}

/// Tests a user whose tickets are all closed.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_all_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    factory::ticket::TicketFactory::new(db, guild.guild_id, 42)
        .closed_on(Some(Utc::now()))
        .build()
        .await?;

    let repo = TicketRepository::new(db);

    assert!(repo
        .find_open_by_user(guild.guild_id as u64, 42)
        .await?
        .is_none());

    Ok(())
}
