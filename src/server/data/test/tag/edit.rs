use super::*;

/// Tests editing a tag's text.
///
/// Expected: Ok(Some) with the new text and the editor recorded
#[tokio::test]
async fn edits_text_and_records_editor() -> Result<(), DbErr> {
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
    let edited = repo
        .edit(EditTagParams {
            guild_id: guild.guild_id as u64,
            name: "faq".to_string(),
            text: "Read the pins.".to_string(),
            editor_id: 77,
        })
        .await?
        .unwrap();

    assert_eq!(edited.text, "Read the pins.");
    assert_eq!(edited.last_edited_by_id, Some(77));

    Ok(())
}

/// Tests editing a tag that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;

    let repo = TagRepository::new(db);
    let edited = repo
        .edit(EditTagParams {
            guild_id: guild.guild_id as u64,
            name: "missing".to_string(),
            text: String::new(),
            editor_id: 77,
        })
        .await?;

    assert!(edited.is_none());

    Ok(())
}
