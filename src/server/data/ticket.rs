use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::{
        ticket::{CreateTicketParams, Ticket},
        Paginated,
    },
    util::snowflake::to_db,
};

pub struct TicketRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TicketRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateTicketParams) -> Result<Ticket, DbErr> {
        let now = Utc::now();
        let model = entity::ticket::ActiveModel {
            guild_id: ActiveValue::Set(to_db(params.guild_id)),
            guild_specific_id: ActiveValue::Set(params.number),
            user_id: ActiveValue::Set(to_db(params.user_id)),
            channel_id: ActiveValue::Set(to_db(params.channel_id)),
            welcome_message_id: ActiveValue::Set(params.welcome_message_id.map(to_db)),
            added_user_ids: ActiveValue::Set("[]".to_string()),
            closed_by_id: ActiveValue::Set(None),
            closed_on: ActiveValue::Set(None),
            reopened_by_id: ActiveValue::Set(None),
            reopened_on: ActiveValue::Set(None),
            last_activity_at: ActiveValue::Set(now),
            is_disabled: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ticket::from_entity(model)
    }

    /// Finds the ticket that owns `channel_id`, including closed and deleted tickets.
    pub async fn find_by_channel_id(&self, channel_id: u64) -> Result<Option<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::ChannelId.eq(to_db(channel_id)))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    /// Finds the user's open ticket in the guild.
    pub async fn find_open_by_user(&self, guild_id: u64, user_id: u64) -> Result<Option<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::ticket::Column::UserId.eq(to_db(user_id)))
            .filter(entity::ticket::Column::ClosedOn.is_null())
            .filter(entity::ticket::Column::IsDisabled.eq(false))
            .one(self.db)
            .await?
            .map(Ticket::from_entity)
            .transpose()
    }

    pub async fn set_welcome_message(&self, id: i32, message_id: u64) -> Result<Option<Ticket>, DbErr> {
        self.update(id, |ticket| {
            ticket.welcome_message_id = ActiveValue::Set(Some(to_db(message_id)));
        })
        .await
    }

    pub async fn close(
        &self,
        id: i32,
        closed_by_id: u64,
        at: DateTime<Utc>,
    ) -> Result<Option<Ticket>, DbErr> {
        self.update(id, |ticket| {
            ticket.closed_by_id = ActiveValue::Set(Some(to_db(closed_by_id)));
            ticket.closed_on = ActiveValue::Set(Some(at));
        })
        .await
    }

    /// Clears `closed_on` and records who reopened the ticket.
    pub async fn reopen(
        &self,
        id: i32,
        reopened_by_id: u64,
        at: DateTime<Utc>,
    ) -> Result<Option<Ticket>, DbErr> {
        self.update(id, |ticket| {
            ticket.closed_on = ActiveValue::Set(None);
            ticket.reopened_by_id = ActiveValue::Set(Some(to_db(reopened_by_id)));
            ticket.reopened_on = ActiveValue::Set(Some(at));
            ticket.last_activity_at = ActiveValue::Set(at);
        })
        .await
    }

    pub async fn disable(&self, id: i32) -> Result<Option<Ticket>, DbErr> {
        self.update(id, |ticket| {
            ticket.is_disabled = ActiveValue::Set(true);
        })
        .await
    }

    /// Replaces the list of members added to the ticket.
    pub async fn set_added_users(&self, id: i32, user_ids: &[u64]) -> Result<Option<Ticket>, DbErr> {
        let json = serde_json::to_string(user_ids).map_err(|e| DbErr::Json(e.to_string()))?;

        self.update(id, |ticket| {
            ticket.added_user_ids = ActiveValue::Set(json);
        })
        .await
    }

    /// Records activity in an open ticket channel. Returns whether a ticket was touched.
    pub async fn touch(&self, channel_id: u64, at: DateTime<Utc>) -> Result<bool, DbErr> {
        let result = entity::prelude::Ticket::update_many()
            .col_expr(entity::ticket::Column::LastActivityAt, Expr::value(at))
            .filter(entity::ticket::Column::ChannelId.eq(to_db(channel_id)))
            .filter(entity::ticket::Column::ClosedOn.is_null())
            .filter(entity::ticket::Column::IsDisabled.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Open tickets in the guild with no activity since `cutoff`.
    pub async fn get_inactive_open(
        &self,
        guild_id: u64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::ticket::Column::ClosedOn.is_null())
            .filter(entity::ticket::Column::IsDisabled.eq(false))
            .filter(entity::ticket::Column::LastActivityAt.lt(cutoff))
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect()
    }

    /// Closed, not yet deleted tickets in the guild closed before `cutoff`.
    pub async fn get_closed_before(
        &self,
        guild_id: u64,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<Ticket>, DbErr> {
        entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(to_db(guild_id)))
            .filter(entity::ticket::Column::IsDisabled.eq(false))
            .filter(entity::ticket::Column::ClosedOn.is_not_null())
            .filter(entity::ticket::Column::ClosedOn.lt(cutoff))
            .all(self.db)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect()
    }

    /// Gets a page of the guild's tickets, newest first.
    pub async fn get_paginated_by_guild(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Ticket>, DbErr> {
        let paginator = entity::prelude::Ticket::find()
            .filter(entity::ticket::Column::GuildId.eq(to_db(guild_id)))
            .order_by_desc(entity::ticket::Column::GuildSpecificId)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let tickets = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Ticket::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Paginated::new(tickets, total, page, per_page))
    }

    async fn update(
        &self,
        id: i32,
        apply: impl FnOnce(&mut entity::ticket::ActiveModel),
    ) -> Result<Option<Ticket>, DbErr> {
        let Some(model) = entity::prelude::Ticket::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        apply(&mut active);
        active.updated_at = ActiveValue::Set(Utc::now());

        Ticket::from_entity(active.update(self.db).await?).map(Some)
    }
}
