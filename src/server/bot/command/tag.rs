//! `/tag`: saved responses members can post by name.

use serenity::all::{
    CommandOptionType, CreateCommand, CreateCommandOption, EditInteractionResponse, Permissions,
};

use crate::server::{
    bot::command::{embed, subcommand, text, CommandContext, Options},
    data::guild::GuildRepository,
    error::AppError,
    model::{
        embed::EmbedConfigParams,
        tag::{CreateTagParams, EditTagParams, Tag},
    },
    service::{embed::ResponseEmbed, tag::TagService},
    util::{color::parse_hex_color, time::relative},
};

pub const NAME: &str = "tag";
/// Subcommand whose reply is posted for the whole channel.
pub const SEND: &str = "send";

const PER_PAGE: u64 = 20;

fn sub(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn string(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::String, name, description)
}

fn tag_name() -> CreateCommandOption {
    string("name", "Name of the tag").required(true)
}

/// Needed to create, edit and delete tags.
fn editor_permissions() -> Permissions {
    Permissions::MANAGE_MESSAGES | Permissions::MANAGE_GUILD
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Saved responses")
        .add_option(
            sub("create", "Save a new tag")
                .add_sub_option(tag_name())
                .add_sub_option(string("text", "What the tag says").required(true))
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::Boolean,
                    "embed",
                    "Post the tag as an embed",
                ))
                .add_sub_option(string("title", "Embed title"))
                .add_sub_option(string("color", "Embed colour as #RRGGBB")),
        )
        .add_option(
            sub("edit", "Change a tag's text")
                .add_sub_option(tag_name())
                .add_sub_option(string("text", "New text").required(true)),
        )
        .add_option(
            sub(SEND, "Post a tag in this channel")
                .add_sub_option(tag_name())
                .add_sub_option(CreateCommandOption::new(
                    CommandOptionType::User,
                    "user",
                    "Member to mention",
                )),
        )
        .add_option(sub("delete", "Delete a tag").add_sub_option(tag_name()))
        .add_option(
            sub("list", "Tags of this server").add_sub_option(
                CreateCommandOption::new(CommandOptionType::Integer, "page", "Page to show")
                    .min_int_value(1),
            ),
        )
        .add_option(sub("info", "Who made a tag and when").add_sub_option(tag_name()))
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let guild_id = context.guild_id()?;
    let service = TagService::new(context.db);
    let (name, options) = subcommand(context.options())?;

    match name {
        "create" => {
            context.require_any(editor_permissions())?;
            let tag = service
                .create(
                    CreateTagParams {
                        guild_id,
                        name: options.required_string("name")?.to_string(),
                        text: options.required_string("text")?.to_string(),
                        creator_id: context.user_id(),
                        embed_config_id: None,
                    },
                    embed_params(guild_id, options)?,
                )
                .await?;
            Ok(text(format!("Tag `{}` created.", tag.name)))
        }
        "edit" => {
            context.require_any(editor_permissions())?;
            let tag = service
                .edit(EditTagParams {
                    guild_id,
                    name: options.required_string("name")?.to_string(),
                    text: options.required_string("text")?.to_string(),
                    editor_id: context.user_id(),
                })
                .await?;
            Ok(text(format!("Tag `{}` updated.", tag.name)))
        }
        SEND => {
            let rendered = service
                .render(guild_id, options.required_string("name")?, options.user("user"))
                .await?;

            let mut response = EditInteractionResponse::new();
            if let Some(content) = rendered.content {
                response = response.content(content);
            }
            if let Some(embed) = rendered.embed {
                response = response.embed(embed);
            }
            Ok(response)
        }
        "delete" => {
            context.require_any(editor_permissions())?;
            let tag = service
                .delete(guild_id, options.required_string("name")?, context.user_id())
                .await?;
            Ok(text(format!("Tag `{}` deleted.", tag.name)))
        }
        "list" => {
            let page = options.integer("page").unwrap_or(1).max(1) as u64 - 1;
            let tags = service.list(guild_id, page, PER_PAGE).await?;
            if tags.items.is_empty() {
                return Ok(text("No tags on this page."));
            }

            let names: Vec<String> = tags.items.iter().map(|tag| format!("`{}`", tag.name)).collect();
            Ok(text(format!(
                "{}\nPage {} of {} ({} tags)",
                names.join(", "),
                tags.page + 1,
                tags.total_pages.max(1),
                tags.total
            )))
        }
        "info" => {
            let tag = service
                .get(guild_id, options.required_string("name")?)
                .await?;
            let guild = GuildRepository::new(context.db)
                .find_by_guild_id(guild_id)
                .await?;
            Ok(embed(describe(ResponseEmbed::for_guild(guild.as_ref()), &tag).build()))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }
}

/// Embed settings for `/tag create`, present only when `embed` is set.
fn embed_params(guild_id: u64, options: Options<'_>) -> Result<Option<EmbedConfigParams>, AppError> {
    if !options.boolean("embed").unwrap_or(false) {
        return Ok(None);
    }

    let color = options.string("color").map(str::to_string);
    if let Some(color) = &color {
        parse_hex_color(color)?;
    }

    Ok(Some(EmbedConfigParams {
        guild_id,
        title: options.string("title").map(str::to_string),
        color,
        ..Default::default()
    }))
}

fn describe(embed: ResponseEmbed, tag: &Tag) -> ResponseEmbed {
    let mut embed = embed
        .title(format!("Tag `{}`", tag.name))
        .field("Created by", format!("<@{}>", tag.creator_id), true)
        .field("Created", relative(tag.created_at), true)
        .field("Embed", if tag.embed_config_id.is_some() { "yes" } else { "no" }, true);

    if let Some(editor_id) = tag.last_edited_by_id {
        embed = embed.field(
            "Last edited",
            format!("by <@{}> {}", editor_id, relative(tag.updated_at)),
            false,
        );
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::CommandDataOption;

    fn parse(value: serde_json::Value) -> Vec<CommandDataOption> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn plain_tag_has_no_embed() {
        let options = parse(serde_json::json!([
            { "name": "title", "type": 3, "value": "Ignored" },
        ]));

        assert!(embed_params(1, Options::new(&options)).unwrap().is_none());
    }

    #[test]
    fn embed_tag_carries_title_and_colour() {
        let options = parse(serde_json::json!([
            { "name": "embed", "type": 5, "value": true },
            { "name": "title", "type": 3, "value": "Rules" },
            { "name": "color", "type": 3, "value": "#FF8800" },
        ]));

        let params = embed_params(9, Options::new(&options)).unwrap().unwrap();

        assert_eq!(params.guild_id, 9);
        assert_eq!(params.title.as_deref(), Some("Rules"));
        assert_eq!(params.color.as_deref(), Some("#FF8800"));
    }

    /// Expected: An invalid colour is rejected before anything is stored
    #[test]
    fn rejects_invalid_colour() {
        let options = parse(serde_json::json!([
            { "name": "embed", "type": 5, "value": true },
            { "name": "color", "type": 3, "value": "orange" },
        ]));

        assert!(matches!(
            embed_params(1, Options::new(&options)),
            Err(AppError::BadRequest(_))
        ));
    }
}
