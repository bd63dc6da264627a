use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "guild")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub guild_id: i64,
    pub name: String,
    pub embed_color: Option<String>,
    pub reminder_channel_id: Option<i64>,
    pub is_disabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::moderation_config::Entity")]
    ModerationConfig,
    #[sea_orm(has_one = "super::ticketing_config::Entity")]
    TicketingConfig,
    #[sea_orm(has_many = "super::mute::Entity")]
    Mute,
    #[sea_orm(has_many = "super::ban::Entity")]
    Ban,
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
}

impl Related<super::moderation_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ModerationConfig.def()
    }
}

impl Related<super::ticketing_config::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketingConfig.def()
    }
}

impl Related<super::mute::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mute.def()
    }
}

impl Related<super::ban::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ban.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
