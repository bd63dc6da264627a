use super::*;

/// Tests storing the members added to a ticket.
///
/// Expected: Ok with the list decoded on read, including ids above `i64::MAX`
#[tokio::test]
async fn stores_added_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_ticket_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, _config) = factory::helpers::create_guild_with_ticketing(db).await?;
    let ticket = factory::create_ticket(db, guild.guild_id, 42).await?;

    let repo = TicketRepository::new(db);
    let updated = repo
        .set_added_users(ticket.id, &[5, u64::MAX - 1])
        .await?
        .unwrap();

    assert_eq!(updated.added_user_ids, vec![5, u64::MAX - 1]);

    Ok(())
}
