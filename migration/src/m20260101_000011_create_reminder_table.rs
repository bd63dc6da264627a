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
                    .table(Reminder::Table)
                    .if_not_exists()
                    .col(pk_auto(Reminder::Id))
                    .col(big_integer(Reminder::GuildId))
                    .col(big_integer(Reminder::ChannelId))
                    .col(big_integer(Reminder::CreatorId))
                    .col(text(Reminder::Text))
                    .col(timestamp_with_time_zone(Reminder::SetFor))
                    .col(string_null(Reminder::CronExpression))
                    .col(boolean(Reminder::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(Reminder::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Reminder::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reminder_guild_id")
                            .from(Reminder::Table, Reminder::GuildId)
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
            .drop_table(Table::drop().table(Reminder::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reminder {
    Table,
    Id,
    GuildId,
    ChannelId,
    CreatorId,
    Text,
    SetFor,
    CronExpression,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
