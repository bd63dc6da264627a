use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guild::Table)
                    .if_not_exists()
                    .col(pk_auto(Guild::Id))
                    .col(big_integer_uniq(Guild::GuildId))
                    .col(string(Guild::Name))
                    .col(string_null(Guild::EmbedColor))
                    .col(big_integer_null(Guild::ReminderChannelId))
                    .col(boolean(Guild::IsDisabled).default(false))
                    .col(
                        timestamp_with_time_zone(Guild::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Guild::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guild::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guild {
    Table,
    Id,
    GuildId,
    Name,
    EmbedColor,
    ReminderChannelId,
    IsDisabled,
    CreatedAt,
    UpdatedAt,
}
