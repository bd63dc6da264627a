use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "role_menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub creator_id: i64,
    pub channel_id: Option<i64>,
    pub message_id: Option<i64>,
    pub embed_config_id: Option<i32>,
    pub is_disabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guild::Entity",
        from = "Column::GuildId",
        to = "super::guild::Column::GuildId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Guild,
    #[sea_orm(has_many = "super::role_menu_option::Entity")]
    RoleMenuOption,
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl Related<super::role_menu_option::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoleMenuOption.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
