use sea_orm::DatabaseConnection;
use serenity::all::CreateEmbed;

use crate::server::{
    data::{embed_config::EmbedConfigRepository, guild::GuildRepository, tag::TagRepository},
    error::AppError,
    model::{
        audit_log::AuditAction,
        embed::EmbedConfigParams,
        tag::{normalize_name, CreateTagParams, EditTagParams, Tag},
        Paginated,
    },
    service::{
        audit_log::AuditLogService,
        embed::{EmbedConfigEnricher, ResponseEmbed},
    },
};

/// A tag ready to be sent: plain text, or an embed with the text as fallback description.
pub struct RenderedTag {
    pub content: Option<String>,
    pub embed: Option<CreateEmbed>,
}

pub struct TagService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TagService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a tag, optionally rendered as an embed.
    ///
    /// # Returns
    /// - `Ok(Tag)` - The new tag
    /// - `Err(AppError::BadRequest)` - Invalid name or empty text
    /// - `Err(AppError::Conflict)` - A tag with that name exists
    pub async fn create(
        &self,
        params: CreateTagParams,
        embed: Option<EmbedConfigParams>,
    ) -> Result<Tag, AppError> {
        let name = valid_name(&params.name)?;
        if params.text.trim().is_empty() {
            return Err(AppError::BadRequest("Tag text cannot be empty".to_string()));
        }

        let repo = TagRepository::new(self.db);
        if repo.find_by_name(params.guild_id, &name).await?.is_some() {
            return Err(AppError::Conflict(format!("Tag '{}' already exists", name)));
        }

        let embed_config_id = match embed {
            Some(embed) => Some(EmbedConfigRepository::new(self.db).create(embed).await?.id),
            None => params.embed_config_id,
        };

        let conflict = format!("Tag '{}' already exists", name);
        repo.create(CreateTagParams {
            name,
            embed_config_id,
            ..params
        })
        .await
        .map_err(|e| AppError::conflict_on_duplicate(e, conflict))
    }

    /// Replaces a tag's text and records the editor.
    pub async fn edit(&self, params: EditTagParams) -> Result<Tag, AppError> {
        let name = valid_name(&params.name)?;
        if params.text.trim().is_empty() {
            return Err(AppError::BadRequest("Tag text cannot be empty".to_string()));
        }

        TagRepository::new(self.db)
            .edit(EditTagParams { name: name.clone(), ..params })
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No tag named '{}'", name)))
    }

    pub async fn get(&self, guild_id: u64, name: &str) -> Result<Tag, AppError> {
        let name = valid_name(name)?;

        TagRepository::new(self.db)
            .find_by_name(guild_id, &name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No tag named '{}'", name)))
    }

    /// Builds the message for a tag, mentioning `mention` when given.
    pub async fn render(
        &self,
        guild_id: u64,
        name: &str,
        mention: Option<u64>,
    ) -> Result<RenderedTag, AppError> {
        let tag = self.get(guild_id, name).await?;
        let mention = mention.map(|user_id| format!("<@{}>", user_id));

        let embed_config = match tag.embed_config_id {
            Some(id) => EmbedConfigRepository::new(self.db).get_by_id(id).await?,
            None => None,
        };
        let Some(embed_config) = embed_config else {
            let content = match mention {
                Some(mention) => format!("{} {}", mention, tag.text),
                None => tag.text,
            };
            return Ok(RenderedTag {
                content: Some(content),
                embed: None,
            });
        };

        let guild = GuildRepository::new(self.db).find_by_guild_id(guild_id).await?;
        let embed = ResponseEmbed::for_guild(guild.as_ref())
            .description(tag.text.clone())
            .enrich(&EmbedConfigEnricher(&embed_config))
            .build();

        Ok(RenderedTag {
            content: mention,
            embed: Some(embed),
        })
    }

    /// Soft-deletes a tag and records it in the audit log.
    pub async fn delete(&self, guild_id: u64, name: &str, actor_id: u64) -> Result<Tag, AppError> {
        let name = valid_name(name)?;
        let tag = TagRepository::new(self.db)
            .disable(guild_id, &name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No tag named '{}'", name)))?;

        AuditLogService::new(self.db)
            .record(
                guild_id,
                actor_id,
                None,
                AuditAction::TagDelete,
                Some(tag.name.clone()),
            )
            .await?;

        Ok(tag)
    }

    pub async fn list(
        &self,
        guild_id: u64,
        page: u64,
        per_page: u64,
    ) -> Result<Paginated<Tag>, AppError> {
        Ok(TagRepository::new(self.db)
            .get_paginated_by_guild(guild_id, page, per_page)
            .await?)
    }
}

fn valid_name(name: &str) -> Result<String, AppError> {
    normalize_name(name).ok_or_else(|| {
        AppError::BadRequest(format!(
            "'{}' is not a valid tag name, use a single word",
            name.trim()
        ))
    })
}
