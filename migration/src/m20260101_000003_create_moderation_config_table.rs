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
                    .table(ModerationConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(ModerationConfig::Id))
                    .col(big_integer_uniq(ModerationConfig::GuildId))
                    .col(big_integer_null(ModerationConfig::MuteRoleId))
                    .col(big_integer_null(ModerationConfig::ModerationLogChannelId))
                    .col(big_integer_null(ModerationConfig::MemberEventsLogChannelId))
                    .col(big_integer_null(ModerationConfig::MessageLogChannelId))
                    .col(boolean(ModerationConfig::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(ModerationConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(ModerationConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_moderation_config_guild_id")
                            .from(ModerationConfig::Table, ModerationConfig::GuildId)
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
            .drop_table(Table::drop().table(ModerationConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ModerationConfig {
    Table,
    Id,
    GuildId,
    MuteRoleId,
    ModerationLogChannelId,
    MemberEventsLogChannelId,
    MessageLogChannelId,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
