use super::*;

/// Tests that tags are listed by name and disabled tags are skipped.
///
/// Expected: Ok with active tags in alphabetical order
#[tokio::test]
async fn lists_active_tags_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(entity::prelude::Tag)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guild = factory::create_guild(db).await?;
    factory::create_tag(db, guild.guild_id, "zeta").await?;
    factory::create_tag(db, guild.guild_id, "alpha").await?;
    factory::tag::TagFactory::new(db, guild.guild_id)
        .name("beta")
        .disabled(true)
        .build()
        .await?;

    let repo = TagRepository::new(db);
    let page = repo
        .get_paginated_by_guild(guild.guild_id as u64, 0, 10)
        .await?;

    let names: Vec<String> = page.items.into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["alpha".to_string(), "zeta".to_string()]);
    assert_eq!(page.total, 2);

    Ok(())
}
