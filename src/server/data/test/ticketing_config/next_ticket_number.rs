use super::*;

/// Tests that each call hands out the next number.
///
/// Expected: Ok(Some(6)) then Ok(Some(7)) starting from counter 5
#[tokio::test]
async fn increments_counter() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::ticketing_config::TicketingConfigFactory::new(db, guild.guild_id)
        .last_ticket_id(5)
        .build()
        .await?;

    let repo = TicketingConfigRepository::new(db);

    assert_eq!(repo.next_ticket_number(guild.guild_id as u64).await?, Some(6));
    assert_eq!(repo.next_ticket_number(guild.guild_id as u64).await?, Some(7));

    Ok(())
}

/// Tests a guild without ticketing config.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_config() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = TicketingConfigRepository::new(db);

    assert_eq!(repo.next_ticket_number(guild.guild_id as u64).await?, None);

    Ok(())
}

/// Expected: Concurrent callers each get a different number
#[tokio::test]
async fn concurrent_calls_get_distinct_numbers() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_ticketing_config(db, guild.guild_id).await?;
    let guild_id = guild.guild_id as u64;

    let repo = TicketingConfigRepository::new(db);
    let (a, b, c) = tokio::join!(
        repo.next_ticket_number(guild_id),
        repo.next_ticket_number(guild_id),
        repo.next_ticket_number(guild_id),
    );

    let mut numbers = vec![a?.unwrap(), b?.unwrap(), c?.unwrap()];
    numbers.sort();

    assert_eq!(numbers, vec![1, 2, 3]);

    Ok(())
}
