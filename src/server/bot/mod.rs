//! Discord bot: gateway events, slash commands and message components.
//!
//! The bot is built during startup and runs in its own tokio task. Its HTTP client is shared
//! with the API and the scheduler so every Discord call goes out under the bot's token.
//!
//! # Gateway Intents
//!
//! - `GUILDS` - Guild availability, joins and removals
//! - `GUILD_MEMBERS` - Joins (mute re-application) and boosts (privileged intent)
//! - `GUILD_MODERATION` - Ban events
//! - `GUILD_MESSAGES` and `MESSAGE_CONTENT` - Ticket activity and message format checks
//!   (`MESSAGE_CONTENT` is privileged)

pub mod command;
pub mod handler;
pub mod start;
