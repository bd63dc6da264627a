use std::collections::HashMap;

use serenity::all::{GuildId, Http, Permissions, Role, RoleId, UserId};
use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    util::snowflake::require_id,
};

/// What a logged-in user must be allowed to do in a guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Change the bot's guild configuration.
    ManageGuild,
    /// View or act on mutes, bans, prunes and tickets.
    Moderate,
}

/// Guards REST endpoints by checking the session user's permissions in a guild.
///
/// Permissions are resolved live through the bot's Discord HTTP client, so the bot must be
/// a member of the guild being accessed.
pub struct AuthGuard<'a> {
    http: &'a Http,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(http: &'a Http, session: &'a Session) -> Self {
        Self { http, session }
    }

    /// Returns the Discord id of the logged-in user.
    ///
    /// # Returns
    /// - `Ok(user_id)` - A user is logged in
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user in session
    pub async fn require_user(&self) -> Result<u64, AppError> {
        match AuthSession::new(self.session).get_user_id().await? {
            Some(user_id) => Ok(user_id),
            None => Err(AuthError::UserNotInSession.into()),
        }
    }

    /// Requires the logged-in user to hold `permission` in `guild_id`.
    ///
    /// # Returns
    /// - `Ok(user_id)` - Access granted
    /// - `Err(AppError::AuthErr(UserNotInSession))` - No user in session
    /// - `Err(AppError::BadRequest)` - `guild_id` is zero
    /// - `Err(AppError::AuthErr(AccessDenied))` - Guild or member could not be fetched, or
    ///   the member lacks the permission
    pub async fn require(&self, guild_id: u64, permission: Permission) -> Result<u64, AppError> {
        let user_id = self.require_user().await?;
        let guild = GuildId::new(require_id(guild_id, "guild")?);

        let partial_guild = guild.to_partial_guild(self.http).await.map_err(|e| {
            AuthError::AccessDenied(user_id, format!("failed to fetch guild {}: {}", guild_id, e))
        })?;

        let member = guild
            .member(self.http, UserId::new(user_id))
            .await
            .map_err(|e| {
                AuthError::AccessDenied(
                    user_id,
                    format!("not a member of guild {}: {}", guild_id, e),
                )
            })?;

        let is_owner = partial_guild.owner_id.get() == user_id;
        let permissions = member_permissions(guild_id, &partial_guild.roles, &member.roles);

        if !has_permission(permission, is_owner, permissions) {
            return Err(AuthError::AccessDenied(
                user_id,
                format!("missing {:?} permission in guild {}", permission, guild_id),
            )
            .into());
        }

        Ok(user_id)
    }
}

/// Combines the guild-level permissions of the @everyone role and the member's roles.
///
/// Channel overwrites are not considered.
pub fn member_permissions(
    guild_id: u64,
    roles: &HashMap<RoleId, Role>,
    member_roles: &[RoleId],
) -> Permissions {
    let everyone = roles
        .get(&RoleId::new(guild_id))
        .map(|role| role.permissions)
        .unwrap_or_else(Permissions::empty);

    member_roles
        .iter()
        .filter_map(|role_id| roles.get(role_id))
        .fold(everyone, |acc, role| acc | role.permissions)
}

/// Owners and administrators pass every check.
pub fn has_permission(permission: Permission, is_owner: bool, permissions: Permissions) -> bool {
    if is_owner || permissions.administrator() {
        return true;
    }

    match permission {
        Permission::ManageGuild => permissions.manage_guild(),
        Permission::Moderate => permissions.intersects(
            Permissions::BAN_MEMBERS | Permissions::MODERATE_MEMBERS | Permissions::MANAGE_MESSAGES,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::role::create_test_role;

    const GUILD_ID: u64 = 1000;

    fn roles(list: Vec<Role>) -> HashMap<RoleId, Role> {
        list.into_iter().map(|role| (role.id, role)).collect()
    }

    /// Expected: @everyone permissions apply even with no roles assigned
    #[test]
    fn includes_everyone_role() {
        let roles = roles(vec![create_test_role(
            GUILD_ID,
            "@everyone",
            Permissions::MANAGE_MESSAGES,
        )]);

        let permissions = member_permissions(GUILD_ID, &roles, &[]);

        assert!(permissions.manage_messages());
        assert!(has_permission(Permission::Moderate, false, permissions));
    }

    /// Expected: Permissions of all member roles are combined
    #[test]
    fn combines_member_roles() {
        let roles = roles(vec![
            create_test_role(GUILD_ID, "@everyone", Permissions::empty()),
            create_test_role(1, "Mod", Permissions::BAN_MEMBERS),
            create_test_role(2, "Manager", Permissions::MANAGE_GUILD),
            create_test_role(3, "Unassigned", Permissions::ADMINISTRATOR),
        ]);

        let permissions = member_permissions(GUILD_ID, &roles, &[RoleId::new(1), RoleId::new(2)]);

        assert!(permissions.ban_members());
        assert!(permissions.manage_guild());
        assert!(!permissions.administrator());
    }

    /// Expected: Unknown role ids are ignored
    #[test]
    fn ignores_unknown_roles() {
        let roles = roles(vec![create_test_role(1, "Mod", Permissions::BAN_MEMBERS)]);

        let permissions = member_permissions(GUILD_ID, &roles, &[RoleId::new(99)]);

        assert!(permissions.is_empty());
    }

    #[test]
    fn moderate_accepts_any_moderation_permission() {
        for bits in [
            Permissions::BAN_MEMBERS,
            Permissions::MODERATE_MEMBERS,
            Permissions::MANAGE_MESSAGES,
        ] {
            assert!(has_permission(Permission::Moderate, false, bits));
        }

        assert!(!has_permission(
            Permission::Moderate,
            false,
            Permissions::SEND_MESSAGES
        ));
    }

    /// Expected: Moderation permissions do not grant guild management
    #[test]
    fn manage_guild_requires_manage_guild() {
        assert!(!has_permission(
            Permission::ManageGuild,
            false,
            Permissions::BAN_MEMBERS
        ));
        assert!(has_permission(
            Permission::ManageGuild,
            false,
            Permissions::MANAGE_GUILD
        ));
    }

    #[test]
    fn owner_and_administrator_pass_everything() {
        assert!(has_permission(
            Permission::ManageGuild,
            true,
            Permissions::empty()
        ));
        assert!(has_permission(
            Permission::ManageGuild,
            false,
            Permissions::ADMINISTRATOR
        ));
    }
}
