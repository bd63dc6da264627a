//! `/rolemenu` and the select menus it posts.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandOptionType, ComponentInteraction, ComponentInteractionDataKind, Context,
    CreateCommand, CreateCommandOption, EditInteractionResponse, Permissions,
};

use crate::server::{
    bot::command::{subcommand, text, CommandContext, Options},
    error::AppError,
    model::{
        embed::EmbedConfigParams,
        role_menu::{parse_custom_id, AddRoleMenuOptionParams, CreateRoleMenuParams, RoleDiff},
    },
    service::role_menu::RoleMenuService,
    util::color::parse_hex_color,
};

pub const NAME: &str = "rolemenu";

fn sub(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn string(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description)
}

fn menu() -> CreateCommandOption {
    string("menu", "Name of the role menu").required(true)
}

fn role() -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::Role, "role", "Role to offer").required(true)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Self-assignable role menus")
        .add_option(
            sub("create", "Create an empty role menu")
                .add_sub_option(string("name", "Name of the new menu").required(true))
                .add_sub_option(string("text", "Text shown above the roles").required(true)),
        )
        .add_option(
            sub("add", "Offer a role in a menu")
                .add_sub_option(menu())
                .add_sub_option(role())
                .add_sub_option(string("label", "Label shown in the menu").required(true))
                .add_sub_option(string("emoji", "Emoji shown next to the label"))
                .add_sub_option(string("description", "Shown below the label")),
        )
        .add_option(
            sub("remove", "Stop offering a role")
                .add_sub_option(menu())
                .add_sub_option(role()),
        )
        .add_option(
            sub("embed", "Customise the menu's embed")
                .add_sub_option(menu())
                .add_sub_option(string("title", "Embed title"))
                .add_sub_option(string("description", "Embed description"))
                .add_sub_option(string("color", "Embed colour as #RRGGBB"))
                .add_sub_option(string("footer", "Embed footer"))
                .add_sub_option(string("image_url", "Image shown in the embed")),
        )
        .add_option(
            sub("send", "Post the menu").add_sub_option(menu()).add_sub_option(
                CreateCommandOption::new(
                    CommandOptionType::Channel,
                    "channel",
                    "Where to post it, defaults to this channel",
                )
                .channel_types(vec![ChannelType::Text]),
            ),
        )
        .add_option(sub("delete", "Delete a menu and its posted message").add_sub_option(menu()))
        .add_option(sub("list", "Role menus of this server"))
        .default_member_permissions(Permissions::MANAGE_ROLES)
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    let service = RoleMenuService::new(context.db, context.ctx.http.clone());
    let (name, options) = subcommand(context.options())?;

    match name {
        "create" => {
            let menu = service
                .create(CreateRoleMenuParams {
                    guild_id,
                    name: options.required_string("name")?.to_string(),
                    text: options.required_string("text")?.to_string(),
                    creator_id: context.user_id(),
                })
                .await?;
            Ok(text(format!(
                "Role menu '{}' created, add roles with /rolemenu add.",
                menu.name
            )))
        }
        "add" => {
            let role_id = options.required_role("role")?;
            let menu = service
                .add_option(AddRoleMenuOptionParams {
                    guild_id,
                    menu_name: options.required_string("menu")?.to_string(),
                    role_id,
                    label: options.required_string("label")?.to_string(),
                    emoji: options.string("emoji").map(str::to_string),
                    description: options.string("description").map(str::to_string),
                })
                .await?;
            Ok(text(format!(
                "Added <@&{}> to '{}' ({} roles).",
                role_id,
                menu.name,
                menu.options.len()
            )))
        }
        "remove" => {
            let role_id = options.required_role("role")?;
            let menu = service
                .remove_option(guild_id, options.required_string("menu")?, role_id)
                .await?;
            Ok(text(format!("Removed <@&{}> from '{}'.", role_id, menu.name)))
        }
        "embed" => {
            let params = embed_params(guild_id, options)?;
            let menu = service
                .set_embed(guild_id, options.required_string("menu")?, params)
                .await?;
            Ok(text(format!("Embed of '{}' updated.", menu.name)))
        }
        "send" => {
            let channel_id = options.channel("channel").unwrap_or(context.channel_id());
            let menu = service
                .send(guild_id, options.required_string("menu")?, channel_id)
                .await?;
            Ok(text(format!("Posted '{}' in <#{}>.", menu.name, channel_id)))
        }
        "delete" => {
            let menu = service
                .delete(guild_id, options.required_string("menu")?)
                .await?;
            Ok(text(format!("Role menu '{}' deleted.", menu.name)))
        }
        "list" => {
            let menus = service.list(guild_id).await?;
            if menus.is_empty() {
                return Ok(text("This server has no role menus."));
            }

            let lines: Vec<String> = menus
                .iter()
                .map(|menu| {
                    let posted = match menu.channel_id {
                        Some(channel_id) => format!("posted in <#{}>", channel_id),
                        None => "not posted".to_string(),
                    };
                    format!("**{}**: {} roles, {}", menu.name, menu.options.len(), posted)
                })
                .collect();
            Ok(text(lines.join("\n")))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }
}

fn embed_params(guild_id: u64, options: Options<'_>) -> Result<EmbedConfigParams, AppError> {
    let color = options.string("color").map(str::to_string);
    if let Some(color) = &color {
        parse_hex_color(color)?;
    }

    Ok(EmbedConfigParams {
        guild_id,
        title: options.string("title").map(str::to_string),
        description: options.string("description").map(str::to_string),
        color,
        footer: options.string("footer").map(str::to_string),
        image_url: options.string("image_url").map(str::to_string),
        ..Default::default()
    })
}

/// Whether `custom_id` belongs to a posted role menu.
pub fn is_select(custom_id: &str) -> bool {
    parse_custom_id(custom_id).is_some()
}

/// Applies a member's selection in a posted role menu.
pub async fn on_select(
    ctx: &Context,
    db: &DatabaseConnection,
    component: &ComponentInteraction,
) -> Result<EditInteractionResponse, AppError> {
    let menu_id = parse_custom_id(&component.data.custom_id)
        .ok_or_else(|| AppError::BadRequest("Unknown role menu".to_string()))?;
    let guild_id = component
        .guild_id
        .ok_or_else(|| AppError::BadRequest("Role menus only work in a server".to_string()))?;
    let ComponentInteractionDataKind::StringSelect { values } = &component.data.kind else {
        return Err(AppError::BadRequest("Unexpected role menu input".to_string()));
    };

    let selected = selected_roles(values);
    let member_roles: Vec<u64> = component
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    let diff = RoleMenuService::new(db, ctx.http.clone())
        .apply_selection(
            guild_id.get(),
            menu_id,
            component.user.id.get(),
            &member_roles,
            &selected,
        )
        .await?;

    Ok(text(describe_diff(&diff)))
}

/// Role ids from select menu values. Values that are not ids are ignored.
fn selected_roles(values: &[String]) -> Vec<u64> {
    values
        .iter()
        .filter_map(|value| value.parse().ok())
        .collect()
}

fn describe_diff(diff: &RoleDiff) -> String {
    let mention = |roles: &[u64]| {
        roles
            .iter()
            .map(|id| format!("<@&{}>", id))
            .collect::<Vec<_>>()
            .join(", ")
    };

    match (diff.add.is_empty(), diff.remove.is_empty()) {
        (true, true) => "Your roles are unchanged.".to_string(),
        (false, true) => format!("Added {}.", mention(&diff.add)),
        (true, false) => format!("Removed {}.", mention(&diff.remove)),
        (false, false) => format!(
            "Added {}. Removed {}.",
            mention(&diff.add),
            mention(&diff.remove)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_values_that_are_not_ids() {
        let values = vec!["12".to_string(), "abc".to_string(), "34".to_string()];

        assert_eq!(selected_roles(&values), vec![12, 34]);
    }

    #[test]
    fn describes_role_changes() {
        let unchanged = RoleDiff::default();
        let both = RoleDiff {
            add: vec![1, 2],
            remove: vec![3],
        };

        assert_eq!(describe_diff(&unchanged), "Your roles are unchanged.");
        assert_eq!(
            describe_diff(&both),
            "Added <@&1>, <@&2>. Removed <@&3>."
        );
    }

    #[test]
    fn recognises_menu_selects() {
        assert!(is_select("rolemenu:4"));
        assert!(!is_select("ticket:open"));
    }
}
