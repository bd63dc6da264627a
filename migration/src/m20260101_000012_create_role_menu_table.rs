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
                    .table(RoleMenu::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleMenu::Id))
                    .col(big_integer(RoleMenu::GuildId))
                    .col(string(RoleMenu::Name))
                    .col(text(RoleMenu::Text))
                    .col(big_integer(RoleMenu::CreatorId))
                    .col(big_integer_null(RoleMenu::ChannelId))
                    .col(big_integer_null(RoleMenu::MessageId))
                    .col(integer_null(RoleMenu::EmbedConfigId))
                    .col(boolean(RoleMenu::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(RoleMenu::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(RoleMenu::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_menu_guild_id")
                            .from(RoleMenu::Table, RoleMenu::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_menu_embed_config_id")
                            .from(RoleMenu::Table, RoleMenu::EmbedConfigId)
                            .to(EmbedConfig::Table, EmbedConfig::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_role_menu_active_name ON role_menu (guild_id, name) WHERE is_disabled = 0",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleMenu::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleMenu {
    Table,
    Id,
    GuildId,
    Name,
    Text,
    CreatorId,
    ChannelId,
    MessageId,
    EmbedConfigId,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
