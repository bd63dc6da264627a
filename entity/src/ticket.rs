use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "ticket")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub guild_id: i64,
    /// Ticket number within the guild, used in the channel name.
    pub guild_specific_id: i64,
    pub user_id: i64,
    #[sea_orm(unique)]
    pub channel_id: i64,
    pub welcome_message_id: Option<i64>,
    /// JSON array of user ids granted access on top of the owner.
    #[sea_orm(column_type = "Text")]
    pub added_user_ids: String,
    pub closed_by_id: Option<i64>,
    pub closed_on: Option<DateTimeUtc>,
    pub reopened_by_id: Option<i64>,
    pub reopened_on: Option<DateTimeUtc>,
    pub last_activity_at: DateTimeUtc,
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
}

impl Related<super::guild::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guild.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
