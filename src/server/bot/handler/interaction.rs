//! Dispatch of slash commands, context menus and message components.
//!
//! Every interaction is deferred first so slow Discord calls never hit the three second
//! response window. The deferred reply is then edited with the result, or with the error's
//! user message.

use sea_orm::DatabaseConnection;
use serenity::all::{
    CommandInteraction, ComponentInteraction, Context, CreateInteractionResponseFollowup,
    EditInteractionResponse, Interaction,
};

use crate::server::{
    bot::command::{self, role_menu, ticket, CommandContext},
    error::AppError,
    util::queue::TaskQueue,
};

pub async fn handle_interaction(
    db: &DatabaseConnection,
    task_queue: &TaskQueue,
    ctx: Context,
    interaction: Interaction,
) {
    match interaction {
        Interaction::Command(command) => handle_command(db, task_queue, &ctx, &command).await,
        Interaction::Component(component) => {
            handle_component(db, task_queue, &ctx, &component).await
        }
        _ => {}
    }
}

async fn handle_command(
    db: &DatabaseConnection,
    task_queue: &TaskQueue,
    ctx: &Context,
    command: &CommandInteraction,
) {
    let public = command::is_public(command);
    let deferred = if public {
        command.defer(&ctx.http).await
    } else {
        command.defer_ephemeral(&ctx.http).await
    };
    if let Err(e) = deferred {
        tracing::error!("Failed to defer /{}: {}", command.data.name, e);
        return;
    }

    tracing::debug!(
        "User {} ran /{} in guild {:?}",
        command.user.id,
        command.data.name,
        command.guild_id
    );

    let context = CommandContext {
        ctx,
        db,
        task_queue,
        command,
    };

    let result = command::run(&context).await;
    let reply = match result {
        Ok(response) => command.edit_response(&ctx.http, response).await.map(|_| ()),
        Err(e) => {
            log_failure(&command.data.name, &e);
            reply_error(ctx, command, public, &e).await
        }
    };

    if let Err(e) = reply {
        tracing::warn!("Failed to answer /{}: {}", command.data.name, e);
    }
}

/// Errors are only shown to the member who ran the command. A public deferral is swapped
/// for an ephemeral followup.
async fn reply_error(
    ctx: &Context,
    command: &CommandInteraction,
    public: bool,
    error: &AppError,
) -> Result<(), serenity::Error> {
    let message = error.user_message();

    if !public {
        command
            .edit_response(&ctx.http, EditInteractionResponse::new().content(message))
            .await?;
        return Ok(());
    }

    command.delete_response(&ctx.http).await?;
    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new()
                .content(message)
                .ephemeral(true),
        )
        .await?;

    Ok(())
}

async fn handle_component(
    db: &DatabaseConnection,
    task_queue: &TaskQueue,
    ctx: &Context,
    component: &ComponentInteraction,
) {
    let custom_id = component.data.custom_id.as_str();
    if !ticket::is_button(custom_id) && !role_menu::is_select(custom_id) {
        tracing::debug!("Ignoring component {}", custom_id);
        return;
    }

    if let Err(e) = component.defer_ephemeral(&ctx.http).await {
        tracing::error!("Failed to defer component {}: {}", custom_id, e);
        return;
    }

    let result = if ticket::is_button(custom_id) {
        ticket::on_button(ctx, db, task_queue, component).await
    } else {
        role_menu::on_select(ctx, db, component).await
    };

    let response = result.unwrap_or_else(|e| {
        log_failure(custom_id, &e);
        EditInteractionResponse::new().content(e.user_message())
    });

    if let Err(e) = component.edit_response(&ctx.http, response).await {
        tracing::warn!("Failed to answer component {}: {}", custom_id, e);
    }
}

/// Unexpected errors are logged by `AppError::user_message`.
fn log_failure(name: &str, error: &AppError) {
    tracing::debug!("{} rejected: {}", name, error);
}
