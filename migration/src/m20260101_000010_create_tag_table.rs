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
                    .table(Tag::Table)
                    .if_not_exists()
                    .col(pk_auto(Tag::Id))
                    .col(big_integer(Tag::GuildId))
                    .col(string(Tag::Name))
                    .col(text(Tag::Text))
                    .col(integer_null(Tag::EmbedConfigId))
                    .col(big_integer(Tag::CreatorId))
                    .col(big_integer_null(Tag::LastEditedById))
                    .col(boolean(Tag::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(Tag::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Tag::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_guild_id")
                            .from(Tag::Table, Tag::GuildId)
                            .to(Guild::Table, Guild::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tag_embed_config_id")
                            .from(Tag::Table, Tag::EmbedConfigId)
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
                "CREATE UNIQUE INDEX IF NOT EXISTS idx_tag_active_name ON tag (guild_id, name) WHERE is_disabled = 0",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tag {
    Table,
    Id,
    GuildId,
    Name,
    Text,
    EmbedConfigId,
    CreatorId,
    LastEditedById,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
