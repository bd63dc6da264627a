//! Bulk message deletion records and the selection rule.

use chrono::{DateTime, Duration, Utc};

use crate::{model::moderation::PruneDto, server::util::snowflake::from_db};

/// Upper bound on `count` for a single prune.
pub const MAX_PRUNE_COUNT: u8 = 99;

/// Discord refuses to bulk delete messages older than this many days.
pub const BULK_DELETE_MAX_AGE_DAYS: i64 = 14;

#[derive(Debug, Clone, PartialEq)]
pub struct Prune {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub moderator_id: u64,
    pub target_user_id: Option<u64>,
    pub requested_count: i32,
    pub deleted_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Prune {
    pub fn from_entity(entity: entity::prune::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            channel_id: from_db(entity.channel_id),
            moderator_id: from_db(entity.moderator_id),
            target_user_id: entity.target_user_id.map(from_db),
            requested_count: entity.requested_count,
            deleted_count: entity.deleted_count,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PruneDto {
        PruneDto {
            id: self.id,
            channel_id: self.channel_id,
            requested_count: self.requested_count,
            deleted_count: self.deleted_count,
            created_at: self.created_at,
        }
    }
}

/// Parameters for a prune request.
#[derive(Debug, Clone)]
pub struct PruneParams {
    pub guild_id: u64,
    pub channel_id: u64,
    pub moderator_id: u64,
    pub filter: PruneFilter,
}

/// Which messages of a channel's history a prune may delete.
#[derive(Debug, Clone, Default)]
pub struct PruneFilter {
    /// Maximum number of messages to delete, 1..=99.
    pub count: u8,
    /// Only delete messages from this author.
    pub target_user_id: Option<u64>,
    /// Only delete this message and messages sent after it.
    pub since_message_id: Option<u64>,
    /// Never delete this message, e.g. the interaction response.
    pub exclude_message_id: Option<u64>,
}

/// A message from channel history, reduced to what the selection needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PruneCandidate {
    pub id: u64,
    pub author_id: u64,
    pub created_at: DateTime<Utc>,
}

/// Record of a finished prune, as stored.
#[derive(Debug, Clone)]
pub struct CreatePruneParams {
    pub guild_id: u64,
    pub channel_id: u64,
    pub moderator_id: u64,
    pub target_user_id: Option<u64>,
    pub requested_count: i32,
    pub deleted_count: i32,
}

/// Picks the ids to delete from `candidates`, ordered newest first.
///
/// Never returns more than `filter.count` ids. Stops at the first message that is too old to
/// bulk delete or older than `since_message_id`, since everything after it is older still.
pub fn select_prunable(
    candidates: &[PruneCandidate],
    filter: &PruneFilter,
    now: DateTime<Utc>,
) -> Vec<u64> {
    let oldest_allowed = now - Duration::days(BULK_DELETE_MAX_AGE_DAYS);
    let mut selected = Vec::new();

    for candidate in candidates {
        if selected.len() >= filter.count as usize {
            break;
        }
        if candidate.created_at <= oldest_allowed {
            break;
        }
        if filter.since_message_id.is_some_and(|since| candidate.id < since) {
            break;
        }
        if filter.exclude_message_id == Some(candidate.id) {
            continue;
        }
        if filter
            .target_user_id
            .is_some_and(|target| candidate.author_id != target)
        {
            continue;
        }

        selected.push(candidate.id);
    }

    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(now: DateTime<Utc>, count: u64) -> Vec<PruneCandidate> {
        // newest first, one minute apart, alternating authors 1 and 2
        (0..count)
            .map(|i| PruneCandidate {
                id: 1000 - i,
                author_id: 1 + i % 2,
                created_at: now - Duration::minutes(i as i64),
            })
            .collect()
    }

    fn filter(count: u8) -> PruneFilter {
        PruneFilter {
            count,
            ..Default::default()
        }
    }

    #[test]
    fn respects_requested_count() {
        let now = Utc::now();
        let selected = select_prunable(&history(now, 50), &filter(10), now);

        assert_eq!(selected.len(), 10);
        assert_eq!(selected[0], 1000);
        assert_eq!(selected[9], 991);
    }

    #[test]
    fn returns_fewer_when_history_is_short() {
        let now = Utc::now();
        let selected = select_prunable(&history(now, 3), &filter(10), now);

        assert_eq!(selected, vec![1000, 999, 998]);
    }

    #[test]
    fn only_selects_target_user_messages() {
        let now = Utc::now();
        let selected = select_prunable(
            &history(now, 20),
            &PruneFilter {
                count: 5,
                target_user_id: Some(2),
                ..Default::default()
            },
            now,
        );

        assert_eq!(selected, vec![999, 997, 995, 993, 991]);
    }

    #[test]
    fn skips_excluded_message_without_counting_it() {
        let now = Utc::now();
        let selected = select_prunable(
            &history(now, 10),
            &PruneFilter {
                count: 3,
                exclude_message_id: Some(1000),
                ..Default::default()
            },
            now,
        );

        assert_eq!(selected, vec![999, 998, 997]);
    }

    #[test]
    fn stops_at_since_message_inclusive() {
        let now = Utc::now();
        let selected = select_prunable(
            &history(now, 10),
            &PruneFilter {
                count: 50,
                since_message_id: Some(997),
                ..Default::default()
            },
            now,
        );

        assert_eq!(selected, vec![1000, 999, 998, 997]);
    }

    #[test]
    fn stops_at_messages_older_than_bulk_delete_limit() {
        let now = Utc::now();
        let candidates = vec![
            PruneCandidate {
                id: 3,
                author_id: 1,
                created_at: now - Duration::days(1),
            },
            PruneCandidate {
                id: 2,
                author_id: 1,
                created_at: now - Duration::days(15),
            },
            PruneCandidate {
                id: 1,
                author_id: 1,
                created_at: now - Duration::days(1),
            },
        ];

        assert_eq!(select_prunable(&candidates, &filter(10), now), vec![3]);
    }
}
