use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EmbedConfig::Table)
                    .if_not_exists()
                    .col(pk_auto(EmbedConfig::Id))
                    .col(big_integer(EmbedConfig::GuildId))
                    .col(string_null(EmbedConfig::Title))
                    .col(text_null(EmbedConfig::Description))
                    .col(string_null(EmbedConfig::Color))
                    .col(string_null(EmbedConfig::Author))
                    .col(string_null(EmbedConfig::Footer))
                    .col(string_null(EmbedConfig::ImageUrl))
                    .col(string_null(EmbedConfig::ThumbnailUrl))
                    .col(
                        timestamp_with_time_zone(EmbedConfig::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(EmbedConfig::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EmbedConfig::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EmbedConfig {
    Table,
    Id,
    GuildId,
    Title,
    Description,
    Color,
    Author,
    Footer,
    ImageUrl,
    ThumbnailUrl,
    CreatedAt,
    UpdatedAt,
}
