//! Fake Serenity roles.

use serenity::all::{Permissions, Role};

/// Creates a Serenity `Role` carrying the given permission bits.
///
/// Colour and position are zero, the role is neither hoisted nor managed.
///
/// # Panics
/// - If the JSON cannot be deserialized into a Role (indicates invalid test data)
///
/// # Examples
///
/// ```rust,ignore
/// let role = create_test_role(123456789, "Moderator", Permissions::BAN_MEMBERS);
/// assert!(role.permissions.ban_members());
/// ```
pub fn create_test_role(role_id: u64, name: &str, permissions: Permissions) -> Role {
    serde_json::from_value(serde_json::json!({
        "id": role_id.to_string(),
        "name": name,
        "color": 0,
        "hoist": false,
        "icon": null,
        "unicode_emoji": null,
        "position": 1,
        "permissions": permissions.bits().to_string(),
        "managed": false,
        "mentionable": false,
    }))
    .expect("Failed to create test role - invalid JSON structure")
}
