use crate::server::{
    data::ticketing_config::TicketingConfigRepository,
    model::guild::UpsertTicketingConfigParams,
};
use chrono::Duration;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_with_auto_cleanup;
mod next_ticket_number;
mod upsert;
