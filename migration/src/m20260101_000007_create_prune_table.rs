use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000001_create_guild_table::Guild;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Prune::Table)
                    .if_not_exists()
                    .col(pk_auto(Prune::Id))
                    .col(big_integer(Prune::GuildId))
                    .col(big_integer(Prune::ChannelId))
                    .col(big_integer(Prune::ModeratorId))
                    .col(big_integer_null(Prune::TargetUserId))
                    .col(integer(Prune::RequestedCount))
                    .col(integer(Prune::DeletedCount))
                    .col(
                        timestamp_with_time_zone(Prune::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_prune_guild_id")
                            .from(Prune::Table, Prune::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Prune::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Prune {
    Table,
    Id,
    GuildId,
    ChannelId,
    ModeratorId,
    TargetUserId,
    RequestedCount,
    DeletedCount,
    CreatedAt,
}
