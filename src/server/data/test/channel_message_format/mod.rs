use crate::server::{
    data::channel_message_format::ChannelMessageFormatRepository,
    model::message_format::SetMessageFormatParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod upsert;
