use super::*;

/// Tests replacing the fields of a stored embed config.
///
/// Expected: Ok with every field taken from the params, including cleared ones
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let existing = factory::create_embed_config(db, guild.guild_id).await?;

    let repo = EmbedConfigRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            EmbedConfigParams {
                guild_id: guild.guild_id as u64,
                title: Some("Rules".to_string()),
                color: Some("#112233".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.title.as_deref(), Some("Rules"));
    assert_eq!(updated.color.as_deref(), Some("#112233"));
    assert_eq!(updated.description, None);

    let stored = repo.get_by_id(existing.id).await?.unwrap();
    assert_eq!(stored.title.as_deref(), Some("Rules"));

    Ok(())
}

/// Expected: Ok(None) for an id that was never stored
#[tokio::test]
async fn unknown_id_is_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = EmbedConfigRepository::new(db)
        .update(404, EmbedConfigParams::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
