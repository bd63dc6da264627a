use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    error::AppError,
    model::prune::{PruneFilter, PruneParams, MAX_PRUNE_COUNT},
    service::prune::PruneService,
    util::queue::TaskQueue,
};
use test_utils::{builder::TestBuilder, factory};

fn params(guild_id: u64, count: u8) -> PruneParams {
    PruneParams {
        guild_id,
        channel_id: 55,
        moderator_id: 1,
        filter: PruneFilter {
            count,
            ..Default::default()
        },
    }
}

/// Tests counts just outside 1..=99.
///
/// Expected: Err(BadRequest) for 0 and 100 without touching the channel
#[tokio::test]
async fn rejects_counts_out_of_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let guild = factory::create_guild(db).await?;
    let guild_id = guild.guild_id as u64;

    let service = PruneService::new(db, Arc::new(Http::new("")), TaskQueue::new());

    assert!(matches!(
        service.prune(params(guild_id, 0)).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(matches!(
        service.prune(params(guild_id, MAX_PRUNE_COUNT + 1)).await,
        Err(AppError::BadRequest(_))
    ));

    Ok(())
}
