//! Per-channel message format enforcement.

use chrono::{DateTime, Utc};
use regex::Regex;

use crate::server::util::snowflake::from_db;

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelMessageFormat {
    pub id: i32,
    pub guild_id: u64,
    pub channel_id: u64,
    pub pattern: String,
    pub creator_id: u64,
    pub last_edited_by_id: Option<u64>,
    pub is_disabled: bool,
    pub updated_at: DateTime<Utc>,
}

impl ChannelMessageFormat {
    pub fn from_entity(entity: entity::channel_message_format::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            channel_id: from_db(entity.channel_id),
            pattern: entity.pattern,
            creator_id: from_db(entity.creator_id),
            last_edited_by_id: entity.last_edited_by_id.map(from_db),
            is_disabled: entity.is_disabled,
            updated_at: entity.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SetMessageFormatParams {
    pub guild_id: u64,
    pub channel_id: u64,
    pub pattern: String,
    pub moderator_id: u64,
}

/// Result of checking a message against its channel's format.
#[derive(Debug, Clone, PartialEq)]
pub enum FormatVerdict {
    /// The channel has no active format.
    NotEnforced,
    Valid,
    /// Message does not match; carries the required pattern.
    Invalid(String),
}

impl FormatVerdict {
    /// Checks `content` against the compiled form of `pattern`.
    ///
    /// `regex` is `None` for a stored pattern that no longer compiles, which is not enforced.
    pub fn check(pattern: &str, regex: Option<&Regex>, content: &str) -> Self {
        match regex {
            Some(regex) if regex.is_match(content) => Self::Valid,
            Some(_) => Self::Invalid(pattern.to_string()),
            None => Self::NotEnforced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pattern: &str, content: &str) -> FormatVerdict {
        let regex = Regex::new(pattern).ok();
        FormatVerdict::check(pattern, regex.as_ref(), content)
    }

    #[test]
    fn uncompilable_pattern_is_not_enforced() {
        assert_eq!(check("([a-z", "anything"), FormatVerdict::NotEnforced);
    }

    #[test]
    fn valid_and_invalid_messages() {
        assert_eq!(check(r"^\[LFG\] .+", "[LFG] raid tonight"), FormatVerdict::Valid);
        assert_eq!(
            check(r"^\[LFG\] .+", "anyone up?"),
            FormatVerdict::Invalid(r"^\[LFG\] .+".to_string())
        );
    }

    #[test]
    fn unanchored_pattern_matches_anywhere() {
        assert_eq!(check("https?://", "see https://example.com"), FormatVerdict::Valid);
    }
}
