use crate::server::{
    data::ban::BanRepository,
    model::moderation::{ApplyOutcome, ApplyPunishmentParams, LiftPunishmentParams},
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod apply;
mod get_expired;
mod lift;
