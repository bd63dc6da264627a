use sea_orm_migration::{prelude::*, schema::*};

use super::m20260101_000012_create_role_menu_table::RoleMenu;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoleMenuOption::Table)
                    .if_not_exists()
                    .col(pk_auto(RoleMenuOption::Id))
                    .col(integer(RoleMenuOption::RoleMenuId))
                    .col(big_integer(RoleMenuOption::RoleId))
                    .col(string(RoleMenuOption::Label))
                    .col(string_null(RoleMenuOption::Emoji))
                    .col(string_null(RoleMenuOption::Description))
                    .col(
                        timestamp_with_time_zone(RoleMenuOption::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_role_menu_option_role_menu_id")
                            .from(RoleMenuOption::Table, RoleMenuOption::RoleMenuId)
                            .to(RoleMenu::Table, RoleMenu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_role_menu_option_role")
                    .table(RoleMenuOption::Table)
                    .col(RoleMenuOption::RoleMenuId)
                    .col(RoleMenuOption::RoleId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoleMenuOption::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RoleMenuOption {
    Table,
    Id,
    RoleMenuId,
    RoleId,
    Label,
    Emoji,
    Description,
    CreatedAt,
}
