use sea_orm::DatabaseConnection;
use serenity::{
    all::{
        ChannelId, CreateActionRow, CreateEmbed, CreateMessage, CreateSelectMenu,
        CreateSelectMenuKind, CreateSelectMenuOption, EditMessage, GuildId, MessageId,
        ReactionType, RoleId, UserId,
    },
    http::Http,
};
use std::sync::Arc;

use crate::server::{
    data::{
        embed_config::EmbedConfigRepository, guild::GuildRepository, role_menu::RoleMenuRepository,
    },
    error::AppError,
    model::{
        embed::EmbedConfigParams,
        role_menu::{
            diff_roles, AddRoleMenuOptionParams, CreateRoleMenuParams, RoleDiff, RoleMenu,
            MAX_OPTIONS,
        },
    },
    service::embed::{EmbedConfigEnricher, ResponseEmbed},
};

pub struct RoleMenuService<'a> {
    db: &'a DatabaseConnection,
    http: Arc<Http>,
}

impl<'a> RoleMenuService<'a> {
    pub fn new(db: &'a DatabaseConnection, http: Arc<Http>) -> Self {
        Self { db, http }
    }

    /// Creates an empty menu.
    ///
    /// # Returns
    /// - `Ok(RoleMenu)` - The new menu
    /// - `Err(AppError::BadRequest)` - Empty name
    /// - `Err(AppError::Conflict)` - A menu with that name exists in the guild
    pub async fn create(&self, params: CreateRoleMenuParams) -> Result<RoleMenu, AppError> {
        let name = params.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::BadRequest("Role menu name cannot be empty".to_string()));
        }

        let repo = RoleMenuRepository::new(self.db);
        if repo.find_by_name(params.guild_id, &name).await?.is_some() {
            return Err(AppError::Conflict(format!(
                "A role menu named '{}' already exists",
                name
            )));
        }

        let conflict = format!("A role menu named '{}' already exists", name);
        repo.create(CreateRoleMenuParams { name, ..params })
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, conflict))
    }

    /// Adds a role to a menu and refreshes the posted menu, if any.
    ///
    /// # Returns
    /// - `Ok(RoleMenu)` - The menu with the new option
    /// - `Err(AppError::NotFound)` - No such menu
    /// - `Err(AppError::BadRequest)` - The menu already has 25 options
    /// - `Err(AppError::Conflict)` - The role is already in the menu
    pub async fn add_option(&self, params: AddRoleMenuOptionParams) -> Result<RoleMenu, AppError> {
        let menu = self.get(params.guild_id, &params.menu_name).await?;
        if menu.options.len() >= MAX_OPTIONS {
            return Err(AppError::BadRequest(format!(
                "A role menu can hold at most {} roles",
                MAX_OPTIONS
            )));
        }
        if menu.role_ids().contains(&params.role_id) {
            return Err(AppError::Conflict(format!(
                "<@&{}> is already in role menu '{}'",
                params.role_id, menu.name
            )));
        }

        let repo = RoleMenuRepository::new(self.db);
        let conflict = format!("<@&{}> is already in role menu '{}'", params.role_id, menu.name);
        repo.add_option(menu.id, params)
            .await
            .map_err(|e| AppError::conflict_on_duplicate(e, conflict))?;

        self.reload_and_refresh(menu).await
    }

    /// # Returns
    /// - `Ok(RoleMenu)` - The menu without the option
    /// - `Err(AppError::NotFound)` - No such menu, or the role is not in it
    pub async fn remove_option(
        &self,
        guild_id: u64,
        menu_name: &str,
        role_id: u64,
    ) -> Result<RoleMenu, AppError> {
        let menu = self.get(guild_id, menu_name).await?;

        if !RoleMenuRepository::new(self.db)
            .remove_option(menu.id, role_id)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "<@&{}> is not in role menu '{}'",
                role_id, menu.name
            )));
        }

        self.reload_and_refresh(menu).await
    }

    /// Gives the menu a custom embed, replacing any previous one.
    pub async fn set_embed(
        &self,
        guild_id: u64,
        menu_name: &str,
        params: EmbedConfigParams,
    ) -> Result<RoleMenu, AppError> {
        let menu = self.get(guild_id, menu_name).await?;
        let embed_repo = EmbedConfigRepository::new(self.db);

        let existing = match menu.embed_config_id {
            Some(id) => embed_repo.update(id, params.clone()).await?,
            None => None,
        };
        if existing.is_none() {
            let config = embed_repo.create(params).await?;
            RoleMenuRepository::new(self.db)
                .set_embed_config(menu.id, Some(config.id))
                .await?;
        }

        self.reload_and_refresh(menu).await
    }

    /// Soft-deletes a menu and removes its posted message.
    pub async fn delete(&self, guild_id: u64, menu_name: &str) -> Result<RoleMenu, AppError> {
        let menu = self.get(guild_id, menu_name).await?;
        RoleMenuRepository::new(self.db).disable(menu.id).await?;

        if let (Some(channel_id), Some(message_id)) = (menu.channel_id, menu.message_id) {
            if let Err(e) = ChannelId::new(channel_id)
                .delete_message(&self.http, MessageId::new(message_id))
                .await
            {
                tracing::warn!("Failed to delete posted role menu {}: {}", menu.id, e);
            }
        }

        Ok(menu)
    }

    pub async fn list(&self, guild_id: u64) -> Result<Vec<RoleMenu>, AppError> {
        Ok(RoleMenuRepository::new(self.db).get_by_guild(guild_id).await?)
    }

    /// Posts the menu to `channel_id` and remembers the message.
    ///
    /// # Returns
    /// - `Ok(RoleMenu)` - The menu with its new message
    /// - `Err(AppError::BadRequest)` - The menu has no options
    pub async fn send(
        &self,
        guild_id: u64,
        menu_name: &str,
        channel_id: u64,
    ) -> Result<RoleMenu, AppError> {
        let menu = self.get(guild_id, menu_name).await?;
        if menu.options.is_empty() {
            return Err(AppError::BadRequest(format!(
                "Add roles to '{}' before sending it",
                menu.name
            )));
        }

        let embed = self.build_embed(&menu).await?;
        let message = ChannelId::new(channel_id)
            .send_message(
                &self.http,
                CreateMessage::new()
                    .embed(embed)
                    .components(vec![build_select(&menu)]),
            )
            .await?;

        let repo = RoleMenuRepository::new(self.db);
        repo.set_message(menu.id, channel_id, message.id.get()).await?;

        tracing::info!("Posted role menu '{}' in channel {}", menu.name, channel_id);

        Ok(repo.get_by_id(menu.id).await?.unwrap_or(menu))
    }

    /// Updates a member's roles after they submit a menu selection.
    ///
    /// # Arguments
    /// - `menu_id` - Menu from the select menu's custom id
    /// - `member_roles` - The member's current roles
    /// - `selected` - Role ids the member selected
    ///
    /// # Returns
    /// - `Ok(RoleDiff)` - Roles added and removed
    /// - `Err(AppError::NotFound)` - The menu was deleted
    pub async fn apply_selection(
        &self,
        guild_id: u64,
        menu_id: i32,
        user_id: u64,
        member_roles: &[u64],
        selected: &[u64],
    ) -> Result<RoleDiff, AppError> {
        let menu = RoleMenuRepository::new(self.db)
            .get_by_id(menu_id)
            .await?
            .filter(|menu| menu.guild_id == guild_id)
            .ok_or_else(|| AppError::NotFound("This role menu no longer exists".to_string()))?;

        let diff = diff_roles(&menu.role_ids(), member_roles, selected);
        let guild = GuildId::new(guild_id);
        let user = UserId::new(user_id);

        for role_id in &diff.add {
            self.http
                .add_member_role(guild, user, RoleId::new(*role_id), Some("Role menu"))
                .await?;
        }
        for role_id in &diff.remove {
            self.http
                .remove_member_role(guild, user, RoleId::new(*role_id), Some("Role menu"))
                .await?;
        }

        tracing::debug!(
            "Role menu {} for {}: +{:?} -{:?}",
            menu.id,
            user_id,
            diff.add,
            diff.remove
        );

        Ok(diff)
    }

    async fn get(&self, guild_id: u64, name: &str) -> Result<RoleMenu, AppError> {
        RoleMenuRepository::new(self.db)
            .find_by_name(guild_id, name.trim())
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No role menu named '{}'", name.trim())))
    }

    /// Reloads `menu` and edits its posted message to match.
    async fn reload_and_refresh(&self, menu: RoleMenu) -> Result<RoleMenu, AppError> {
        let menu = RoleMenuRepository::new(self.db)
            .get_by_id(menu.id)
            .await?
            .unwrap_or(menu);

        if let (Some(channel_id), Some(message_id)) = (menu.channel_id, menu.message_id) {
            let mut edit = EditMessage::new().embed(self.build_embed(&menu).await?);
            edit = if menu.options.is_empty() {
                edit.components(Vec::new())
            } else {
                edit.components(vec![build_select(&menu)])
            };
            if let Err(e) = ChannelId::new(channel_id)
                .edit_message(&self.http, MessageId::new(message_id), edit)
                .await
            {
                tracing::warn!("Failed to refresh posted role menu {}: {}", menu.id, e);
            }
        }

        Ok(menu)
    }

    async fn build_embed(&self, menu: &RoleMenu) -> Result<CreateEmbed, AppError> {
        let guild = GuildRepository::new(self.db)
            .find_by_guild_id(menu.guild_id)
            .await?;
        let mut embed = ResponseEmbed::for_guild(guild.as_ref())
            .title(menu.name.clone())
            .description(menu.text.clone());

        if let Some(id) = menu.embed_config_id {
            if let Some(config) = EmbedConfigRepository::new(self.db).get_by_id(id).await? {
                embed = embed.enrich(&EmbedConfigEnricher(&config));
            }
        }

        Ok(embed.build())
    }
}

fn build_select(menu: &RoleMenu) -> CreateActionRow {
    let options = menu
        .options
        .iter()
        .map(|option| {
            let mut item = CreateSelectMenuOption::new(&option.label, option.role_id.to_string());
            if let Some(description) = &option.description {
                item = item.description(description);
            }
            if let Some(emoji) = option
                .emoji
                .as_deref()
                .and_then(|e| ReactionType::try_from(e).ok())
            {
                item = item.emoji(emoji);
            }
            item
        })
        .collect();

    CreateActionRow::SelectMenu(
        CreateSelectMenu::new(menu.custom_id(), CreateSelectMenuKind::String { options })
            .placeholder("Choose your roles")
            .min_values(0)
            .max_values(menu.options.len() as u8),
    )
}
