use sea_orm::DatabaseConnection;
use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;
use std::sync::Arc;

use crate::server::{
    bot::handler::Handler, config::Config, error::AppError, util::queue::TaskQueue,
};

/// Builds the Discord client without connecting.
///
/// The client's HTTP handle is returned separately so the API and the scheduler can call
/// Discord with the bot's token while the gateway connection runs in its own task.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `db` - Database connection for the event handlers
/// - `task_queue` - Queue shared with the API for bulk Discord operations
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - The client and its HTTP handle
/// - `Err(AppError::DiscordErr)` - The client could not be built
pub async fn init_bot(
    config: &Config,
    db: DatabaseConnection,
    task_queue: TaskQueue,
) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS and MESSAGE_CONTENT are privileged and must be enabled in the
    // Discord Developer Portal.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_MODERATION
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(db, task_queue))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects to the gateway and processes events until the connection ends.
///
/// Call from a spawned task; this does not return while the bot is running.
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
