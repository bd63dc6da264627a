use crate::server::data::server_booster::ServerBoosterRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod start;
mod stop;
