use super::*;

/// Tests that a new config gets the default name prefixes.
///
/// Expected: Ok with prefixes `ticket`/`closed` and counter 0
#[tokio::test]
async fn creates_config_with_default_prefixes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = TicketingConfigRepository::new(db);
    let config = repo
        .upsert(UpsertTicketingConfigParams {
            guild_id: guild.guild_id as u64,
            open_category_id: Some(10),
            closed_category_id: Some(20),
            close_after: Some(Duration::hours(24)),
            ..Default::default()
        })
        .await?;

    assert_eq!(config.open_name_prefix, "ticket");
    assert_eq!(config.closed_name_prefix, "closed");
    assert_eq!(config.last_ticket_id, 0);
    assert_eq!(config.close_after, Some(Duration::hours(24)));
    assert!(config.is_usable());

    Ok(())
}

/// Tests updating prefixes without touching categories.
///
/// Expected: Ok with new prefix and original categories
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (guild, existing) = factory::helpers::create_guild_with_ticketing(db).await?;

    let repo = TicketingConfigRepository::new(db);
    let config = repo
        .upsert(UpsertTicketingConfigParams {
            guild_id: guild.guild_id as u64,
            open_name_prefix: Some("support".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(config.open_name_prefix, "support");
    assert_eq!(
        config.open_category_id,
        existing.open_category_id.map(|id| id as u64)
    );
    assert_eq!(
        config.closed_category_id,
        existing.closed_category_id.map(|id| id as u64)
    );

    Ok(())
}
