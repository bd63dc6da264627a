//! Ready event handler.
//!
//! Fired once per gateway connection after the handshake. Registers the global slash
//! commands so Discord always has the current definitions.

use serenity::all::{Command, Context, Ready};

use crate::server::bot::command;

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context used to register commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord in {} guilds",
        ready.user.name,
        ready.guilds.len()
    );

    match Command::set_global_commands(&ctx.http, command::all()).await {
        Ok(commands) => tracing::info!("Registered {} application commands", commands.len()),
        Err(e) => tracing::error!("Failed to register application commands: {}", e),
    }
}
