use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticketing_config")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: i64,
    pub open_category_id: Option<i64>,
    pub closed_category_id: Option<i64>,
    pub log_channel_id: Option<i64>,
    /// Last per-guild ticket number handed out.
    pub last_ticket_id: i64,
    pub open_name_prefix: String,
    pub closed_name_prefix: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub welcome_message: Option<String>,
    pub close_after_seconds: Option<i64>,
    pub clean_after_seconds: Option<i64>,
    pub center_embed_config_id: Option<i32>,
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
    #[sea_orm(
        belongs_to = "super::embed_config::Entity",
        from = "Column::CenterEmbedConfigId",
        to = "super::embed_config::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    EmbedConfig,
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl Related<super::embed_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EmbedConfig.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
