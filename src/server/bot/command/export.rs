//! `/export`: posts the current channel's history as a text file.

use serenity::all::{CreateCommand, EditInteractionResponse, Permissions};

use crate::server::{
    bot::command::CommandContext, error::AppError, service::transcript::TranscriptService,
};

pub const NAME: &str = "export";

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Export this channel's messages as a text file")
        .default_member_permissions(Permissions::MANAGE_MESSAGES)
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let channel_id = context.channel_id();
    let attachment = TranscriptService::new(context.ctx.http.clone(), context.task_queue.clone())
        .export(channel_id)
        .await?;

    tracing::info!(
        "User {} exported channel {}",
        context.user_id(),
        channel_id
    );

    Ok(EditInteractionResponse::new()
        .content(format!("Transcript of <#{}>", channel_id))
        .new_attachment(attachment))
}
