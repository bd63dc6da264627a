use crate::server::{
    data::moderation_config::ModerationConfigRepository,
    model::guild::UpsertModerationConfigParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_guild_id;
mod upsert;
