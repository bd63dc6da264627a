use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role_menu_option")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role_menu_id: i32,
    pub role_id: i64,
    pub label: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role_menu::Entity",
        from = "Column::RoleMenuId",
        to = "super::role_menu::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    RoleMenu,
}

impl Related<super::role_menu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleMenu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
