use crate::server::{
    data::audit_log::AuditLogRepository,
    model::audit_log::{AuditAction, CreateAuditLogParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated_by_guild;
