use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_guild_table::Guild,
    m20260101_000002_create_embed_config_table::EmbedConfig,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketingConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketingConfig::Id))
                    .col(big_integer_uniq(TicketingConfig::GuildId))
                    .col(big_integer_null(TicketingConfig::OpenCategoryId))
                    .col(big_integer_null(TicketingConfig::ClosedCategoryId))
                    .col(big_integer_null(TicketingConfig::LogChannelId))
                    .col(big_integer(TicketingConfig::LastTicketId).default(0))
                    .col(string(TicketingConfig::OpenNamePrefix).default("ticket"))
                    .col(string(TicketingConfig::ClosedNamePrefix).default("closed"))
                    .col(text_null(TicketingConfig::WelcomeMessage))
                    .col(big_integer_null(TicketingConfig::CloseAfterSeconds))
                    .col(big_integer_null(TicketingConfig::CleanAfterSeconds))
                    .col(integer_null(TicketingConfig::CenterEmbedConfigId))
                    .col(boolean(TicketingConfig::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(TicketingConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(TicketingConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticketing_config_guild_id")
                            .from(TicketingConfig::Table, TicketingConfig::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ticketing_config_center_embed_config_id")
                            .from(TicketingConfig::Table, TicketingConfig::CenterEmbedConfigId)
                            .to(EmbedConfig::Table, EmbedConfig::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketingConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TicketingConfig {
    Table,
    Id,
    GuildId,
    OpenCategoryId,
    ClosedCategoryId,
    LogChannelId,
    LastTicketId,
    OpenNamePrefix,
    ClosedNamePrefix,
    WelcomeMessage,
    CloseAfterSeconds,
    CleanAfterSeconds,
    CenterEmbedConfigId,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
