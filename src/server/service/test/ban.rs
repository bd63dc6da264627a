use chrono::{Duration, Utc};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    error::{moderation::ModerationError, AppError},
    model::moderation::ApplyPunishmentParams,
    service::ban::{BanService, MAX_DELETE_MESSAGE_DAYS},
};
use test_utils::{builder::TestBuilder, factory};

fn ban_params(guild_id: u64) -> ApplyPunishmentParams {
    ApplyPunishmentParams {
        guild_id,
        user_id: 7,
        moderator_id: 1,
        applied_until: None,
        reason: None,
    }
}

/// Tests asking Discord to delete more than a week of messages.
///
/// Expected: Err(BadRequest) and no ban stored
#[tokio::test]
async fn rejects_more_than_a_week_of_deletes() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let service = BanService::new(db, Arc::new(Http::new("")));
    let result = service
        .ban(ban_params(guild_id), MAX_DELETE_MESSAGE_DAYS + 1)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert!(service.get_active(guild_id, 7).await?.is_none());

    Ok(())
}

/// Expected: Err(DurationInPast) for a ban that would already have ended
#[tokio::test]
async fn rejects_end_in_past() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;

    let result = BanService::new(db, Arc::new(Http::new("")))
        .ban(
            ApplyPunishmentParams {
                applied_until: Some(Utc::now() - Duration::hours(1)),
                ..ban_params(guild.guild_id as u64)
            },
            0,
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::ModerationErr(ModerationError::DurationInPast))
    ));

    Ok(())
}
