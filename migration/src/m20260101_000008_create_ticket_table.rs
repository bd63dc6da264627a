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
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(big_integer(Ticket::GuildId))
                    .col(big_integer(Ticket::GuildSpecificId))
                    .col(big_integer(Ticket::UserId))
                    .col(big_integer_uniq(Ticket::ChannelId))
                    .col(big_integer_null(Ticket::WelcomeMessageId))
                    .col(text(Ticket::AddedUserIds).default("[]"))
                    .col(big_integer_null(Ticket::ClosedById))
                    .col(timestamp_with_time_zone_null(Ticket::ClosedOn))
                    .col(big_integer_null(Ticket::ReopenedById))
                    .col(timestamp_with_time_zone_null(Ticket::ReopenedOn))
                    .col(
                        timestamp_with_time_zone(Ticket::LastActivityAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(boolean(Ticket::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(Ticket::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Ticket::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticket_guild_id")
                            .from(Ticket::Table, Ticket::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_ticket_guild_number")
                    .table(Ticket::Table)
                    .col(Ticket::GuildId)
                    .col(Ticket::GuildSpecificId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // At most one open ticket per member
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_ticket_open_user ON ticket (guild_id, user_id) WHERE closed_on IS NULL AND is_disabled = 0",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    GuildId,
    GuildSpecificId,
    UserId,
    ChannelId,
    WelcomeMessageId,
    AddedUserIds,
    ClosedById,
    ClosedOn,
    ReopenedById,
    ReopenedOn,
    LastActivityAt,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
