use crate::server::{data::embed_config::EmbedConfigRepository, model::embed::EmbedConfigParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod update;
