use crate::server::{
    data::mute::MuteRepository,
    model::moderation::{ApplyOutcome, ApplyPunishmentParams, LiftPunishmentParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod get_active_paginated;
mod get_expired;
mod lift;

fn params(guild_id: i64, user_id: u64, applied_until: Option<chrono::DateTime<Utc>>) -> ApplyPunishmentParams {
    ApplyPunishmentParams {
        guild_id: guild_id as u64,
        user_id,
        moderator_id: 900,
        applied_until,
        reason: Some("spam".to_string()),
    }
}
