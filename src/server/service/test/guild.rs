use chrono::Duration;

use crate::server::{
    data::embed_config::EmbedConfigRepository,
    error::AppError,
    model::{embed::EmbedConfigParams, guild::UpsertTicketingConfigParams},
    service::guild::GuildService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests that the embed colour is validated and stored upper-case.
///
/// Expected: Ok with `#AABBCC`, Err(BadRequest) for a bad colour
#[tokio::test]
async fn validates_embed_color() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let service = GuildService::new(db);
    let updated = service
        .set_embed_color(guild_id, Some("#aabbcc".to_string()))
        .await?;

    assert_eq!(updated.embed_color.as_deref(), Some("#AABBCC"));
    assert!(matches!(
        service
            .set_embed_color(guild_id, Some("blue".to_string()))
            .await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}

/// Tests that ticketing prefixes and delays are validated.
///
/// Expected: Err(BadRequest) for an empty prefix and for a zero delay
#[tokio::test]
async fn validates_ticketing_config() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let service = GuildService::new(db);

    let empty_prefix = service
        .upsert_ticketing_config(UpsertTicketingConfigParams {
            guild_id,
            open_name_prefix: Some(" ".to_string()),
            ..Default::default()
        })
        .await;
    let zero_delay = service
        .upsert_ticketing_config(UpsertTicketingConfigParams {
            guild_id,
            close_after: Some(Duration::zero()),
            ..Default::default()
        })
        .await;

    assert!(matches!(empty_prefix, Err(AppError::BadRequest(_))));
    assert!(matches!(zero_delay, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that setting the ticket center embed twice reuses one embed config.
///
/// Expected: Same embed config id both times, holding the latest title
#[tokio::test]
async fn ticket_center_embed_is_updated_in_place() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;
    let service = GuildService::new(db);

    let first = service
        .set_ticket_center_embed(EmbedConfigParams {
            guild_id,
            title: Some("Support".to_string()),
            ..Default::default()
        })
        .await?;
    let second = service
        .set_ticket_center_embed(EmbedConfigParams {
            guild_id,
            title: Some("Help desk".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(first.center_embed_config_id.is_some());
    assert_eq!(first.center_embed_config_id, second.center_embed_config_id);

    let id = second.center_embed_config_id.unwrap();
    let config = EmbedConfigRepository::new(db).get_by_id(id).await?.unwrap();
    assert_eq!(config.title.as_deref(), Some("Help desk"));

    Ok(())
}

/// Tests that a guild left and rejoined is enabled again.
///
/// Expected: Disabled after `disable`, enabled after `ensure`
#[tokio::test]
async fn rejoining_reenables_guild() -> Result<(), AppError> {
    let test = TestBuilder::new().with_guild_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = GuildService::new(db);

    service.ensure(77, "Lisbeth HQ".to_string()).await?;
    service.disable(77).await?;
    assert!(service.get(77).await?.guild.is_disabled);

    let guild = service.ensure(77, "Lisbeth HQ".to_string()).await?;
    assert!(!guild.is_disabled);

    Ok(())
}
