use crate::server::{
    data::ticket::TicketRepository,
    model::ticket::{CreateTicketParams, TicketState},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod close;
mod create;
mod find_open_by_user;
mod get_closed_before;
mod get_inactive_open;
mod set_added_users;
mod touch;
