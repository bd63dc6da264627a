use regex::Regex;
use sea_orm::DatabaseConnection;
use std::{collections::HashMap, sync::Arc};
use tokio::sync::RwLock;

use crate::server::{
    data::channel_message_format::ChannelMessageFormatRepository,
    error::AppError,
    model::message_format::{ChannelMessageFormat, FormatVerdict, SetMessageFormatParams},
};

/// Compiled channel patterns shared across message events.
///
/// An entry is reused while the channel's stored pattern is unchanged and recompiled as soon
/// as it differs. Clones share the same map.
#[derive(Clone, Default)]
pub struct PatternCache {
    compiled: Arc<RwLock<HashMap<u64, (String, Option<Regex>)>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled form of `pattern` for `channel_id`, or `None` when it does not compile.
    pub async fn get_or_compile(&self, channel_id: u64, pattern: &str) -> Option<Regex> {
        if let Some((cached, regex)) = self.compiled.read().await.get(&channel_id) {
            if cached == pattern {
                return regex.clone();
            }
        }

        let regex = Regex::new(pattern).ok();
        self.compiled
            .write()
            .await
            .insert(channel_id, (pattern.to_string(), regex.clone()));
        regex
    }

    /// Drops the channel's entry once it no longer has a format.
    pub async fn forget(&self, channel_id: u64) {
        self.compiled.write().await.remove(&channel_id);
    }
}

pub struct MessageFormatService<'a> {
    db: &'a DatabaseConnection,
    patterns: PatternCache,
}

impl<'a> MessageFormatService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_cache(db, PatternCache::new())
    }

    /// Service that compiles patterns through `patterns`.
    pub fn with_cache(db: &'a DatabaseConnection, patterns: PatternCache) -> Self {
        Self { db, patterns }
    }

    /// Enforces `pattern` in a channel, replacing any previous format.
    ///
    /// # Returns
    /// - `Ok(ChannelMessageFormat)` - The stored format
    /// - `Err(AppError::BadRequest)` - `pattern` is not a valid regular expression
    pub async fn set(&self, params: SetMessageFormatParams) -> Result<ChannelMessageFormat, AppError> {
        if let Err(e) = Regex::new(&params.pattern) {
            return Err(AppError::BadRequest(format!(
                "Invalid regular expression: {}",
                e
            )));
        }

        let format = ChannelMessageFormatRepository::new(self.db)
            .upsert(params)
            .await?;

        tracing::info!(
            "Channel {} now requires messages matching `{}`",
            format.channel_id,
            format.pattern
        );

        Ok(format)
    }

    /// Stops enforcing the channel's format.
    ///
    /// # Returns
    /// - `Ok(())` - Format removed
    /// - `Err(AppError::NotFound)` - The channel has no active format
    pub async fn remove(&self, channel_id: u64, moderator_id: u64) -> Result<(), AppError> {
        if !ChannelMessageFormatRepository::new(self.db)
            .disable(channel_id, moderator_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "<#{}> has no message format",
                channel_id
            )));
        }

        Ok(())
    }

    /// The channel's active format, if any.
    pub async fn get(&self, channel_id: u64) -> Result<Option<ChannelMessageFormat>, AppError> {
        let format = ChannelMessageFormatRepository::new(self.db)
            .find_by_channel_id(channel_id)
            .await?;

        Ok(format.filter(|f| !f.is_disabled))
    }

    /// Checks a message against its channel's format.
    pub async fn verify(&self, channel_id: u64, content: &str) -> Result<FormatVerdict, AppError> {
        let Some(format) = self.get(channel_id).await? else {
            self.patterns.forget(channel_id).await;
            return Ok(FormatVerdict::NotEnforced);
        };

        let regex = self
            .patterns
            .get_or_compile(channel_id, &format.pattern)
            .await;

        Ok(FormatVerdict::check(&format.pattern, regex.as_ref(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cache_reuses_until_pattern_changes() {
        let cache = PatternCache::new();

        let first = cache.get_or_compile(1, "^a").await;
        let again = cache.get_or_compile(1, "^a").await;
        let changed = cache.get_or_compile(1, "^b").await;

        assert_eq!(first.map(|r| r.as_str().to_string()), Some("^a".to_string()));
        assert_eq!(again.map(|r| r.as_str().to_string()), Some("^a".to_string()));
        assert!(changed.is_some_and(|r| r.is_match("b")));
        assert_eq!(cache.compiled.read().await.len(), 1);
    }

    #[tokio::test]
    async fn cache_remembers_uncompilable_patterns() {
        let cache = PatternCache::new();

        assert!(cache.get_or_compile(1, "([a-z").await.is_none());
        assert!(cache.get_or_compile(1, "([a-z").await.is_none());

        cache.forget(1).await;
        assert!(cache.compiled.read().await.is_empty());
    }
}
