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
                    .table(ChannelMessageFormat::Table)
                    .if_not_exists()
                    .col(pk_auto(ChannelMessageFormat::Id))
                    .col(big_integer(ChannelMessageFormat::GuildId))
                    .col(big_integer_uniq(ChannelMessageFormat::ChannelId))
                    .col(string(ChannelMessageFormat::Pattern))
                    .col(big_integer(ChannelMessageFormat::CreatorId))
                    .col(big_integer_null(ChannelMessageFormat::LastEditedById))
                    .col(boolean(ChannelMessageFormat::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(ChannelMessageFormat::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ChannelMessageFormat::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_channel_message_format_guild_id")
                            .from(ChannelMessageFormat::Table, ChannelMessageFormat::GuildId)
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
            .drop_table(Table::drop().table(ChannelMessageFormat::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChannelMessageFormat {
    Table,
    Id,
    GuildId,
    ChannelId,
    Pattern,
    CreatorId,
    LastEditedById,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
