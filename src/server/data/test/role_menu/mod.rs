use crate::server::{
    data::role_menu::RoleMenuRepository,
    model::role_menu::{AddRoleMenuOptionParams, CreateRoleMenuParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod options;
