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
                    .table(ServerBooster::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerBooster::Id))
                    .col(big_integer(ServerBooster::GuildId))
                    .col(big_integer(ServerBooster::UserId))
                    .col(timestamp_with_time_zone(ServerBooster::BoostingSince))
                    .col(timestamp_with_time_zone_null(ServerBooster::StoppedAt))
                    .col(boolean(ServerBooster::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(ServerBooster::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ServerBooster::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_server_booster_guild_id")
                            .from(ServerBooster::Table, ServerBooster::GuildId)
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
            .drop_table(Table::drop().table(ServerBooster::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerBooster {
    Table,
    Id,
    GuildId,
    UserId,
    BoostingSince,
    StoppedAt,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
