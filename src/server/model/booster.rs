//! Server booster tracking.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::server::util::snowflake::from_db;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerBooster {
    pub id: i32,
    pub guild_id: u64,
    pub user_id: u64,
    pub boosting_since: DateTime<Utc>,
    pub stopped_at: Option<DateTime<Utc>>,
    pub is_disabled: bool,
}

impl ServerBooster {
    pub fn from_entity(entity: entity::server_booster::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            user_id: from_db(entity.user_id),
            boosting_since: entity.boosting_since,
            stopped_at: entity.stopped_at,
            is_disabled: entity.is_disabled,
        }
    }
}

/// Change in a member's boosting status between two member updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostChange {
    Started(DateTime<Utc>),
    Stopped,
    Unchanged,
}

/// Compares `premium_since` before and after a member update.
///
/// Without a cached previous member only a start can be detected, so `before` is `None` then.
pub fn boost_change(before: Option<DateTime<Utc>>, after: Option<DateTime<Utc>>) -> BoostChange {
    match (before, after) {
        (None, Some(since)) => BoostChange::Started(since),
        (Some(_), None) => BoostChange::Stopped,
        _ => BoostChange::Unchanged,
    }
}

/// Records to open and close so stored boosters match the guild's current boosters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoosterSync {
    /// Users boosting without an active record, with their `premium_since`.
    pub start: Vec<(u64, DateTime<Utc>)>,
    /// Users with an active record who no longer boost.
    pub stop: Vec<u64>,
}

/// Plans a sync against the boosters seen in the guild's member list.
///
/// When `members_complete` is false the list is partial and a missing booster may simply
/// not have been sent, so only starts are planned.
pub fn plan_sync(
    active_records: &[ServerBooster],
    current_boosters: &HashMap<u64, DateTime<Utc>>,
    members_complete: bool,
) -> BoosterSync {
    let recorded: HashSet<u64> = active_records.iter().map(|b| b.user_id).collect();
    let mut sync = BoosterSync::default();

    for (user_id, since) in current_boosters {
        if !recorded.contains(user_id) {
            sync.start.push((*user_id, *since));
        }
    }
    for record in active_records.iter().filter(|_| members_complete) {
        if !current_boosters.contains_key(&record.user_id) {
            sync.stop.push(record.user_id);
        }
    }

    sync.start.sort_by_key(|(user_id, _)| *user_id);
    sync.stop.sort_unstable();
    sync
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(user_id: u64) -> ServerBooster {
        ServerBooster {
            id: user_id as i32,
            guild_id: 1,
            user_id,
            boosting_since: Utc::now(),
            stopped_at: None,
            is_disabled: false,
        }
    }

    #[test]
    fn detects_start_and_stop() {
        let now = Utc::now();

        assert_eq!(boost_change(None, Some(now)), BoostChange::Started(now));
        assert_eq!(boost_change(Some(now), None), BoostChange::Stopped);
        assert_eq!(boost_change(Some(now), Some(now)), BoostChange::Unchanged);
        assert_eq!(boost_change(None, None), BoostChange::Unchanged);
    }

    #[test]
    fn sync_starts_new_and_stops_missing_boosters() {
        let now = Utc::now();
        let current = HashMap::from([(2, now), (3, now)]);
        let sync = plan_sync(&[record(1), record(2)], &current, true);

        assert_eq!(sync.start, vec![(3, now)]);
        assert_eq!(sync.stop, vec![1]);
    }

    #[test]
    fn sync_is_empty_when_records_match() {
        let current = HashMap::from([(1, Utc::now())]);

        assert_eq!(plan_sync(&[record(1)], &current, true), BoosterSync::default());
    }

    #[test]
    fn partial_member_list_never_stops_boosters() {
        let now = Utc::now();
        let current = HashMap::from([(3, now)]);
        let sync = plan_sync(&[record(1), record(2)], &current, false);

        assert_eq!(sync.start, vec![(3, now)]);
        assert!(sync.stop.is_empty());
    }
}
