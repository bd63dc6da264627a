use crate::server::data::guild::GuildRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod set_disabled;
mod update_settings;
mod upsert;
