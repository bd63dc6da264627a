//! Self-assignable role menus.

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::server::util::snowflake::from_db;

/// Discord allows at most 25 options in a select menu.
pub const MAX_OPTIONS: usize = 25;

/// Prefix of the select menu custom id, followed by the menu id.
pub const CUSTOM_ID_PREFIX: &str = "rolemenu:";

#[derive(Debug, Clone, PartialEq)]
pub struct RoleMenu {
    pub id: i32,
    pub guild_id: u64,
    pub name: String,
    pub text: String,
    pub creator_id: u64,
    pub channel_id: Option<u64>,
    pub message_id: Option<u64>,
    pub embed_config_id: Option<i32>,
    pub options: Vec<RoleMenuOption>,
    pub created_at: DateTime<Utc>,
}

impl RoleMenu {
    pub fn from_entity(
        entity: entity::role_menu::Model,
        options: Vec<entity::role_menu_option::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            guild_id: from_db(entity.guild_id),
            name: entity.name,
            text: entity.text,
            creator_id: from_db(entity.creator_id),
            channel_id: entity.channel_id.map(from_db),
            message_id: entity.message_id.map(from_db),
            embed_config_id: entity.embed_config_id,
            options: options
                .into_iter()
                .map(RoleMenuOption::from_entity)
                .collect(),
            created_at: entity.created_at,
        }
    }

    pub fn custom_id(&self) -> String {
        format!("{}{}", CUSTOM_ID_PREFIX, self.id)
    }

    pub fn role_ids(&self) -> Vec<u64> {
        self.options.iter().map(|o| o.role_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RoleMenuOption {
    pub id: i32,
    pub role_id: u64,
    pub label: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
}

impl RoleMenuOption {
    pub fn from_entity(entity: entity::role_menu_option::Model) -> Self {
        Self {
            id: entity.id,
            role_id: from_db(entity.role_id),
            label: entity.label,
            emoji: entity.emoji,
            description: entity.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoleMenuParams {
    pub guild_id: u64,
    pub name: String,
    pub text: String,
    pub creator_id: u64,
}

#[derive(Debug, Clone)]
pub struct AddRoleMenuOptionParams {
    pub guild_id: u64,
    pub menu_name: String,
    pub role_id: u64,
    pub label: String,
    pub emoji: Option<String>,
    pub description: Option<String>,
}

/// Parses the menu id out of a `rolemenu:{id}` custom id.
pub fn parse_custom_id(custom_id: &str) -> Option<i32> {
    custom_id.strip_prefix(CUSTOM_ID_PREFIX)?.parse().ok()
}

/// Roles to add and remove after a member picks `selected` from a menu of `menu_roles`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleDiff {
    pub add: Vec<u64>,
    pub remove: Vec<u64>,
}

/// Adds selected menu roles the member lacks and removes unselected menu roles they have.
///
/// Roles outside the menu are never touched, nor are selected ids that are not menu roles.
pub fn diff_roles(menu_roles: &[u64], member_roles: &[u64], selected: &[u64]) -> RoleDiff {
    let member: HashSet<u64> = member_roles.iter().copied().collect();
    let selected: HashSet<u64> = selected.iter().copied().collect();
    let mut diff = RoleDiff::default();

    for role in menu_roles {
        match (selected.contains(role), member.contains(role)) {
            (true, false) => diff.add.push(*role),
            (false, true) => diff.remove.push(*role),
            _ => {}
        }
    }

    diff
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_selected_and_removes_unselected_menu_roles() {
        let diff = diff_roles(&[1, 2, 3], &[2, 3, 99], &[1, 3]);

        assert_eq!(diff.add, vec![1]);
        assert_eq!(diff.remove, vec![2]);
    }

    #[test]
    fn leaves_roles_outside_the_menu_alone() {
        let diff = diff_roles(&[1, 2], &[50, 60], &[50]);

        assert!(diff.add.is_empty());
        assert!(diff.remove.is_empty());
    }

    #[test]
    fn empty_selection_removes_every_held_menu_role() {
        let diff = diff_roles(&[1, 2, 3], &[1, 3], &[]);

        assert_eq!(diff.remove, vec![1, 3]);
    }

    #[test]
    fn parses_custom_id() {
        assert_eq!(parse_custom_id("rolemenu:42"), Some(42));
        assert_eq!(parse_custom_id("ticket:close"), None);
        assert_eq!(parse_custom_id("rolemenu:abc"), None);
    }
}
