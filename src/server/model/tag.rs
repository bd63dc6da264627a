//! Named canned responses.

use chrono::{DateTime, Utc};

use crate::{
    model::tag::{PaginatedTagsDto, TagDto},
    server::{model::Paginated, util::snowflake::from_db},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub text: String,
    /// Rendered as this embed instead of plain text when set.
    pub embed_config_id: Option<i32>,
    pub creator_id: u64,
    pub last_edited_by_id: Option<u64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            name: entity.name,
            text: entity.text,
            embed_config_id: entity.embed_config_id,
            creator_id: from_db(entity.creator_id),
            last_edited_by_id: entity.last_edited_by_id.map(from_db),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            name: self.name,
            text: self.text,
            has_embed: self.embed_config_id.is_some(),
            creator_id: self.creator_id,
            updated_at: self.updated_at,
        }
    }
}

impl Paginated<Tag> {
    pub fn into_dto(self) -> PaginatedTagsDto {
        PaginatedTagsDto {
            tags: self.items.into_iter().map(Tag::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateTagParams {
    pub guild_id: u64,
    pub name: String,
    pub text: String,
    pub creator_id: u64,
    pub embed_config_id: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct EditTagParams {
    pub guild_id: u64,
    pub name: String,
    pub text: String,
    pub editor_id: u64,
}

/// Longest tag name, Discord's limit for autocomplete choices.
pub const MAX_NAME_LENGTH: usize = 100;

/// Tag names are matched case-insensitively and without surrounding whitespace.
///
/// # Returns
/// - `Some(name)` - Trimmed, lowercased name
/// - `None` - Empty, too long, or contains whitespace
pub fn normalize_name(name: &str) -> Option<String> {
    let name = name.trim().to_lowercase();
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH || name.contains(char::is_whitespace) {
        return None;
    }

    Some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(normalize_name("  Rules "), Some("rules".to_string()));
    }

    #[test]
    fn rejects_empty_and_spaced_names() {
        assert_eq!(normalize_name("   "), None);
        assert_eq!(normalize_name("two words"), None);
        assert_eq!(normalize_name(&"x".repeat(MAX_NAME_LENGTH + 1)), None);
    }
}
