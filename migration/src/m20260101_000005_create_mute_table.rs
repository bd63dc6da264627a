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
                    .table(Mute::Table)
                    .if_not_exists()
                    .col(pk_auto(Mute::Id))
                    .col(big_integer(Mute::GuildId))
                    .col(big_integer(Mute::UserId))
                    .col(big_integer(Mute::AppliedById))
                    .col(timestamp_with_time_zone_null(Mute::AppliedUntil))
                    .col(text_null(Mute::Reason))
                    .col(big_integer_null(Mute::LiftedById))
                    .col(timestamp_with_time_zone_null(Mute::LiftedOn))
                    .col(text_null(Mute::LiftReason))
                    .col(boolean(Mute::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(Mute::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Mute::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mute_guild_id")
                            .from(Mute::Table, Mute::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active mute per member
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_mute_active_user ON mute (guild_id, user_id) WHERE is_disabled = 0",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mute::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mute {
    Table,
    Id,
    GuildId,
    UserId,
    AppliedById,
    AppliedUntil,
    Reason,
    LiftedById,
    LiftedOn,
    LiftReason,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
