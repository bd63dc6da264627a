use sea_orm::DatabaseConnection;
use chrono::{DateTime, Utc};
use serenity::all::{Context, Guild, Member, UnavailableGuild};
use std::collections::HashMap;

use crate::server::{
    service::{booster::BoosterService, guild::GuildService},
    util::time::from_discord_timestamp,
};

/// Handles the guild_create event when a guild becomes available or the bot joins one.
///
/// Stores the guild and catches up on boosts started or stopped while the bot was offline.
pub async fn handle_guild_create(
    db: &DatabaseConnection,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let guild_id = guild.id.get();

    if let Err(e) = GuildService::new(db).ensure(guild_id, guild.name.clone()).await {
        tracing::error!("Failed to store guild {}: {}", guild_id, e);
        return;
    }

    let boosters = current_boosters(guild.members.values());
    let complete = members_complete(guild.members.len(), guild.member_count);

    tracing::debug!(
        "Guild {} has {} of {} members cached, {} boosting",
        guild_id,
        guild.members.len(),
        guild.member_count,
        boosters.len()
    );
    if !complete {
        tracing::info!(
            "Member list of guild {} is partial; not stopping missing boosters",
            guild_id
        );
    }

    if let Err(e) = BoosterService::new(db, ctx.http.clone())
        .sync(guild_id, &boosters, complete)
        .await
    {
        tracing::error!("Failed to sync boosters of guild {}: {}", guild_id, e);
    }
}

/// Handles the guild_delete event.
///
/// An outage also fires this event with `unavailable` set; only an actual removal disables
/// the guild.
pub async fn handle_guild_delete(
    db: &DatabaseConnection,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    if let Err(e) = GuildService::new(db).disable(guild_id).await {
        tracing::error!("Failed to disable guild {}: {}", guild_id, e);
    }
}

/// Large guilds send only part of their member list on guild_create.
fn members_complete(cached: usize, member_count: u64) -> bool {
    cached as u64 >= member_count
}

/// Boosting members with the time they started boosting.
fn current_boosters<'a>(members: impl Iterator<Item = &'a Member>) -> HashMap<u64, DateTime<Utc>> {
    members
        .filter_map(|member| {
            member
                .premium_since
                .map(|since| (member.user.id.get(), from_discord_timestamp(since)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_utils::serenity::create_test_member;

    #[test]
    fn member_list_is_complete_only_when_all_members_arrived() {
        assert!(members_complete(250, 250));
        assert!(!members_complete(250, 80_000));
    }

    #[test]
    fn collects_only_boosting_members() {
        let members = [
            create_test_member(1, 10, &[], Some("2024-02-03T04:05:06.000000+00:00")),
            create_test_member(1, 11, &[5], None),
        ];

        let boosters = current_boosters(members.iter());

        assert_eq!(boosters.len(), 1);
        assert_eq!(
            boosters.get(&10),
            Some(&Utc.with_ymd_and_hms(2024, 2, 3, 4, 5, 6).unwrap())
        );
    }
}
