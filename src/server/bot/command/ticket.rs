//! `/ticket` and the ticket buttons.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ChannelType, CommandOptionType, ComponentInteraction, Context, CreateCommand,
    CreateCommandOption, EditInteractionResponse, Permissions,
};

use crate::server::{
    bot::command::{require_any, subcommand, text, CommandContext},
    error::AppError,
    model::ticket::button,
    service::ticket::TicketService,
    util::queue::TaskQueue,
};

pub const NAME: &str = "ticket";

/// Needed to reopen, delete, add or remove members, and post the ticket center.
fn staff_permissions() -> Permissions {
    Permissions::MANAGE_CHANNELS | Permissions::MANAGE_MESSAGES
}

fn subcommand_option(name: &str, description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::SubCommand, name, description)
}

fn user_option(description: &str) -> CreateCommandOption {
    CreateCommandOption::new(CommandOptionType::User, "user", description).required(true)
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Private support tickets")
        .add_option(subcommand_option("open", "Open a ticket"))
        .add_option(subcommand_option("close", "Close this ticket"))
        .add_option(subcommand_option("reopen", "Reopen this closed ticket"))
        .add_option(subcommand_option("delete", "Delete this ticket and its channel"))
        .add_option(
            subcommand_option("add", "Give a member access to this ticket")
                .add_sub_option(user_option("Member to add")),
        )
        .add_option(
            subcommand_option("remove", "Take a member's access to this ticket")
                .add_sub_option(user_option("Member to remove")),
        )
        .add_option(subcommand_option(
            "transcript",
            "Post a transcript of this ticket to the ticket log",
        ))
        .add_option(
            subcommand_option("center", "Post the \"open a ticket\" message").add_sub_option(
                CreateCommandOption::new(CommandOptionType::Channel, "channel", "Where to post it")
                    .channel_types(vec![ChannelType::Text]),
            ),
        )
        .dm_permission(false)
}

pub async fn run(context: &CommandContext<'_>) -> Result<EditInteractionResponse, AppError> {
    let service = TicketService::new(
        context.db,
        context.ctx.http.clone(),
        context.task_queue.clone(),
    );
    let guild_id = context.guild_id()?;
    let channel_id = context.channel_id();
    let user_id = context.user_id();
    let (name, options) = subcommand(context.options())?;

    match name {
        "open" => {
            let ticket = service.open(guild_id, user_id).await?;
            Ok(text(format!("Your ticket is open: <#{}>", ticket.channel_id)))
        }
        "close" => {
            service.close(channel_id, user_id).await?;
            Ok(text("Ticket closed."))
        }
        "reopen" => {
            context.require_any(staff_permissions())?;
            service.reopen(channel_id, user_id).await?;
            Ok(text("Ticket reopened."))
        }
        "delete" => {
            context.require_any(staff_permissions())?;
            service.delete(channel_id, user_id).await?;
            Ok(text("Ticket deleted."))
        }
        "add" => {
            context.require_any(staff_permissions())?;
            let member = options.required_user("user")?;
            service.add_member(channel_id, member).await?;
            Ok(text(format!("Added <@{}> to this ticket.", member)))
        }
        "remove" => {
            context.require_any(staff_permissions())?;
            let member = options.required_user("user")?;
            service.remove_member(channel_id, member).await?;
            Ok(text(format!("Removed <@{}> from this ticket.", member)))
        }
        "transcript" => {
            let log_channel_id = service.send_transcript(channel_id, user_id).await?;
            Ok(text(format!("Transcript posted in <#{}>.", log_channel_id)))
        }
        "center" => {
            context.require_any(staff_permissions())?;
            let target = options.channel("channel").unwrap_or(channel_id);
            service.post_center(guild_id, target).await?;
            Ok(text(format!("Ticket center posted in <#{}>.", target)))
        }
        other => Err(AppError::BadRequest(format!("Unknown subcommand '{}'", other))),
    }
}

/// Whether `custom_id` belongs to a ticket button.
pub fn is_button(custom_id: &str) -> bool {
    custom_id.starts_with("ticket:")
}

/// Handles a press of one of the ticket buttons.
pub async fn on_button(
    ctx: &Context,
    db: &DatabaseConnection,
    task_queue: &TaskQueue,
    component: &ComponentInteraction,
) -> Result<EditInteractionResponse, AppError> {
    let service = TicketService::new(db, ctx.http.clone(), task_queue.clone());
    let channel_id = component.channel_id.get();
    let user_id = component.user.id.get();
    let granted = component
        .member
        .as_ref()
        .and_then(|member| member.permissions)
        .unwrap_or_else(Permissions::empty);

    match component.data.custom_id.as_str() {
        button::OPEN => {
            let guild_id = component
                .guild_id
                .ok_or_else(|| AppError::BadRequest("Tickets only work in a server".to_string()))?;
            let ticket = service.open(guild_id.get(), user_id).await?;
            Ok(text(format!("Your ticket is open: <#{}>", ticket.channel_id)))
        }
        button::CLOSE => {
            service.close(channel_id, user_id).await?;
            Ok(text("Ticket closed."))
        }
        button::REOPEN => {
            require_any(user_id, granted, staff_permissions())?;
            service.reopen(channel_id, user_id).await?;
            Ok(text("Ticket reopened."))
        }
        button::DELETE => {
            require_any(user_id, granted, staff_permissions())?;
            service.delete(channel_id, user_id).await?;
            Ok(text("Ticket deleted."))
        }
        button::TRANSCRIPT => {
            let log_channel_id = service.send_transcript(channel_id, user_id).await?;
            Ok(text(format!("Transcript posted in <#{}>.", log_channel_id)))
        }
        other => Err(AppError::BadRequest(format!("Unknown button '{}'", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_ticket_buttons() {
        for id in [
            button::OPEN,
            button::CLOSE,
            button::REOPEN,
            button::DELETE,
            button::TRANSCRIPT,
        ] {
            assert!(is_button(id));
        }

        assert!(!is_button("rolemenu:1"));
    }
}
