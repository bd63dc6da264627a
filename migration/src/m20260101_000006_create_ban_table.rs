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
                    .table(Ban::Table)
                    .if_not_exists()
                    .col(pk_auto(Ban::Id))
                    .col(big_integer(Ban::GuildId))
                    .col(big_integer(Ban::UserId))
                    .col(big_integer(Ban::AppliedById))
                    .col(timestamp_with_time_zone_null(Ban::AppliedUntil))
                    .col(text_null(Ban::Reason))
                    .col(big_integer_null(Ban::LiftedById))
                    .col(timestamp_with_time_zone_null(Ban::LiftedOn))
                    .col(text_null(Ban::LiftReason))
                    .col(boolean(Ban::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(Ban::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Ban::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ban_guild_id")
                            .from(Ban::Table, Ban::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // At most one active ban per member
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_ban_active_user ON ban (guild_id, user_id) WHERE is_disabled = 0",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ban::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ban {
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
