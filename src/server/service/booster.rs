use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;
use serenity::http::Http;
use std::{collections::HashMap, sync::Arc};

use crate::server::{
    data::server_booster::ServerBoosterRepository,
    error::AppError,
    model::booster::{boost_change, plan_sync, BoostChange, BoosterSync, ServerBooster},
    service::{embed::BoosterEnricher, moderation_log::ModerationLogService},
};

pub struct BoosterService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> BoosterService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Tracks a member's boost status after a member update.
    ///
    /// The stored active record stands in for the member's previous state, so missed
    /// updates are caught up on the next one.
    ///
    /// # Arguments
    /// - `premium_since` - The member's boost start, `None` when not boosting
    ///
    /// # Returns
    /// - `Ok(BoostChange)` - What changed; starts and stops are posted to the member events log
    pub async fn member_update(
        &self,
        guild_id: u64,
        user_id: u64,
        premium_since: Option<DateTime<Utc>>,
    ) -> Result<BoostChange, AppError> {
        let repo = ServerBoosterRepository::new(self.db);
        let active = repo
            .get_active_by_guild(guild_id)
            .await?
            .into_iter()
            .find(|b| b.user_id == user_id);

        let change = boost_change(active.map(|b| b.boosting_since), premium_since);
        let record = match change {
            BoostChange::Started(since) => repo.start(guild_id, user_id, since).await?,
            BoostChange::Stopped => repo.stop(guild_id, user_id, Utc::now()).await?,
            BoostChange::Unchanged => None,
        };

        if let Some(record) = record {
            let started = matches!(change, BoostChange::Started(_));
            tracing::info!(
                "Member {} {} boosting guild {}",
                user_id,
                if started { "started" } else { "stopped" },
                guild_id
            );
            self.announce(&record, started).await?;
        }

        Ok(change)
    }

    /// Brings stored boosters in line with the guild's current boosters.
    ///
    /// # Arguments
    /// - `current_boosters` - Boosting member ids with their `premium_since`
    /// - `members_complete` - Whether `current_boosters` came from the full member list;
    ///   records are only stopped when it did
    pub async fn sync(
        &self,
        guild_id: u64,
        current_boosters: &HashMap<u64, DateTime<Utc>>,
        members_complete: bool,
    ) -> Result<BoosterSync, AppError> {
        let repo = ServerBoosterRepository::new(self.db);
        let active = repo.get_active_by_guild(guild_id).await?;
        let plan = plan_sync(&active, current_boosters, members_complete);

        let now = Utc::now();
        for (user_id, since) in &plan.start {
            repo.start(guild_id, *user_id, *since).await?;
        }
        for user_id in &plan.stop {
            repo.stop(guild_id, *user_id, now).await?;
        }

        if !plan.start.is_empty() || !plan.stop.is_empty() {
            tracing::info!(
                "Synced boosters of guild {}: {} started, {} stopped",
                guild_id,
                plan.start.len(),
                plan.stop.len()
            );
        }

        Ok(plan)
    }

    pub async fn list_active(&self, guild_id: u64) -> Result<Vec<ServerBooster>, AppError> {
        Ok(ServerBoosterRepository::new(self.db)
            .get_active_by_guild(guild_id)
            .await?)
    }

    pub async fn history(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Vec<ServerBooster>, AppError> {
        Ok(ServerBoosterRepository::new(self.db)
            .get_history(guild_id, user_id)
            .await?)
    }

    async fn announce(&self, booster: &ServerBooster, started: bool) -> Result<(), AppError> {
        let log = ModerationLogService::new(self.db, self.http.clone());
        let embed = log
            .embed(booster.guild_id)
            .await?
            .enrich(&BoosterEnricher { booster, started })
            .build();

        log.log_member_event(booster.guild_id, embed).await
    }
}
