use chrono::Utc;
use sea_orm::DatabaseConnection;
use serenity::all::{Context, CreateMessage, Message};

use crate::server::{
    error::AppError,
    model::message_format::FormatVerdict,
    service::{
        message_format::{MessageFormatService, PatternCache},
        moderation_log::ModerationLogService,
        ticket::TicketService,
    },
    util::queue::TaskQueue,
};

/// Handles message creation in a channel.
///
/// Keeps ticket activity current and removes messages that break the channel's format.
pub async fn handle_message(
    db: &DatabaseConnection,
    task_queue: &TaskQueue,
    patterns: &PatternCache,
    ctx: Context,
    message: Message,
) {
    let Some(guild_id) = message.guild_id else {
        return;
    };
    if message.author.bot {
        return;
    }

    let channel_id = message.channel_id.get();

    if let Err(e) = TicketService::new(db, ctx.http.clone(), task_queue.clone())
        .touch(channel_id, Utc::now())
        .await
    {
        tracing::error!("Failed to record activity in channel {}: {}", channel_id, e);
    }

    let verdict = match MessageFormatService::with_cache(db, patterns.clone())
        .verify(channel_id, &message.content)
        .await
    {
        Ok(verdict) => verdict,
        Err(e) => {
            tracing::error!("Failed to check message format in {}: {}", channel_id, e);
            return;
        }
    };

    if let FormatVerdict::Invalid(pattern) = verdict {
        if let Err(e) = remove_invalid(db, &ctx, guild_id.get(), &message, &pattern).await {
            tracing::error!(
                "Failed to remove message {} breaking the format of {}: {}",
                message.id,
                channel_id,
                e
            );
        }
    }
}

/// Deletes a message that does not match `pattern`, tells its author why and logs it.
async fn remove_invalid(
    db: &DatabaseConnection,
    ctx: &Context,
    guild_id: u64,
    message: &Message,
    pattern: &str,
) -> Result<(), AppError> {
    message.delete(&ctx.http).await?;

    tracing::debug!(
        "Removed message {} by {} in {}",
        message.id,
        message.author.id,
        message.channel_id
    );

    let notice = CreateMessage::new().content(format!(
        "Your message in <#{}> was removed because it does not match the channel's format `{}`.",
        message.channel_id, pattern
    ));
    if let Err(e) = message.author.direct_message(&ctx.http, notice).await {
        tracing::debug!("Could not DM {}: {}", message.author.id, e);
    }

    let log = ModerationLogService::new(db, ctx.http.clone());
    let embed = log
        .embed(guild_id)
        .await?
        .title("Message removed")
        .description(truncate(&message.content, 1024))
        .field("Author", format!("<@{}>", message.author.id), true)
        .field("Channel", format!("<#{}>", message.channel_id), true)
        .field("Format", format!("`{}`", pattern), false)
        .build();

    log.log_message_event(guild_id, embed).await
}

/// Cuts `text` to at most `max` characters.
fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((index, _)) => format!("{}…", &text[..index]),
        None => text.to_string(),
    }
}
