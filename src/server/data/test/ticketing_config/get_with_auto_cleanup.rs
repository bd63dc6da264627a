use super::*;

/// Tests that only enabled configs with a close or clean delay are returned.
///
/// Expected: Ok with the two configs that have a delay
#[tokio::test]
async fn returns_configs_with_delays() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let closing = factory::create_guild(db).await?;
    factory::ticketing_config::TicketingConfigFactory::new(db, closing.guild_id)
        .close_after_seconds(Some(3600))
        .build()
        .await?;

    let cleaning = factory::create_guild(db).await?;
    factory::ticketing_config::TicketingConfigFactory::new(db, cleaning.guild_id)
        .clean_after_seconds(Some(60))
        .build()
        .await?;

    let manual = factory::create_guild(db).await?;
    factory::create_ticketing_config(db, manual.guild_id).await?;

    let disabled = factory::create_guild(db).await?;
    factory::ticketing_config::TicketingConfigFactory::new(db, disabled.guild_id)
        .close_after_seconds(Some(3600))
        .disabled(true)
        .build()
        .await?;

    let repo = TicketingConfigRepository::new(db);
    let mut guild_ids: Vec<u64> = repo
        .get_with_auto_cleanup()
        .await?
        .into_iter()
        .map(|c| c.guild_id)
        .collect();
    guild_ids.sort_unstable();

    let mut expected = vec![closing.guild_id as u64, cleaning.guild_id as u64];
    expected.sort_unstable();
    assert_eq!(guild_ids, expected);

    Ok(())
}
