use crate::server::{
    data::tag::TagRepository,
    model::tag::{CreateTagParams, EditTagParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod edit;
mod get_paginated_by_guild;
