use super::*;

/// Tests creating a tag and finding it by name.
///
/// Expected: Ok with the tag found in its guild only
#[tokio::test]
async fn creates_and_finds_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    let other = factory::create_guild(db).await?;

    let repo = TagRepository::new(db);
    let tag = repo
        .create(CreateTagParams {
            guild_id: guild.guild_id as u64,
            name: "rules".to_string(),
            text: "Be nice.".to_string(),
            creator_id: 42,
            embed_config_id: None,
        })
        .await?;

    assert_eq!(
        repo.find_by_name(guild.guild_id as u64, "rules").await?,
        Some(tag)
    );
    assert!(repo
        .find_by_name(other.guild_id as u64, "rules")
        .await?
        .is_none());

    Ok(())
}

/// Tests that a disabled tag frees its name.
///
/// Expected: Ok(None) from `find_by_name` after disabling
#[tokio::test]
async fn disabled_tag_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_tag(db, guild.guild_id, "faq").await?;

    let repo = TagRepository::new(db);
    let disabled = repo.disable(guild.guild_id as u64, "faq").await?;

    assert!(disabled.is_some());
    assert!(repo
        .find_by_name(guild.guild_id as u64, "faq")
        .await?
        .is_none());

    Ok(())
}
