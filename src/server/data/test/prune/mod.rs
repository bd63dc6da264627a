use crate::server::{data::prune::PruneRepository, model::prune::CreatePruneParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
