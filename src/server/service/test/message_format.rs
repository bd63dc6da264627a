use crate::server::{
    error::AppError,
    model::message_format::{FormatVerdict, SetMessageFormatParams},
    service::message_format::{MessageFormatService, PatternCache},
};
use entity::prelude::ChannelMessageFormat;
use test_utils::{builder::TestBuilder, factory};

fn params(guild_id: u64, pattern: &str) -> SetMessageFormatParams {
    SetMessageFormatParams {
        guild_id,
        channel_id: 500,
        pattern: pattern.to_string(),
        moderator_id: 42,
    }
}

/// Tests that a pattern which does not compile is refused.
///
/// Expected: Err(BadRequest) and nothing enforced
#[tokio::test]
async fn rejects_invalid_regex() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(ChannelMessageFormat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let service = MessageFormatService::new(db);
    let result = service.set(params(guild.guild_id as u64, "([a-z")).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(service.verify(500, "anything").await?, FormatVerdict::NotEnforced);

    Ok(())
}

/// Tests verifying messages against a stored format.
///
/// Expected: Valid for a match anywhere in the message, Invalid with the pattern otherwise
#[tokio::test]
async fn verifies_messages() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(ChannelMessageFormat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let service = MessageFormatService::new(db);
    service.set(params(guild.guild_id as u64, r"\[LFG\]")).await?;

    assert_eq!(
        service.verify(500, "Anyone up? [LFG] raid").await?,
        FormatVerdict::Valid
    );
    assert_eq!(
        service.verify(500, "hello").await?,
        FormatVerdict::Invalid(r"\[LFG\]".to_string())
    );
    assert_eq!(service.verify(501, "hello").await?, FormatVerdict::NotEnforced);

    Ok(())
}

/// Tests replacing and then removing a format.
///
/// Expected: Latest pattern enforced, then nothing, and a second removal is NotFound
#[tokio::test]
async fn replaces_and_removes_format() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(ChannelMessageFormat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let service = MessageFormatService::new(db);
    service.set(params(guild_id, "^first")).await?;
    service.set(params(guild_id, "^second")).await?;

    let format = service.get(500).await?.unwrap();
    assert_eq!(format.pattern, "^second");

    service.remove(500, 42).await?;
    assert!(service.get(500).await?.is_none());
    assert!(matches!(
        service.remove(500, 42).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a shared pattern cache picks up a replaced format.
///
/// Expected: The old pattern stops matching once the new one is stored
#[tokio::test]
async fn cached_pattern_follows_replacement() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_guild_tables()
        .with_table(ChannelMessageFormat)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let patterns = PatternCache::new();
    let service = MessageFormatService::with_cache(db, patterns.clone());
    service.set(params(guild_id, "^first")).await?;
    assert_eq!(service.verify(500, "first post").await?, FormatVerdict::Valid);

    MessageFormatService::new(db)
        .set(params(guild_id, "^second"))
        .await?;

    assert_eq!(
        service.verify(500, "first post").await?,
        FormatVerdict::Invalid("^second".to_string())
    );

    Ok(())
}
