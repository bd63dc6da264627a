//! SeaORM entity models for every table managed by the bot.
//!
//! Discord snowflakes are stored as `i64` (the bit pattern of the `u64` id)
//! since neither SQLite nor Postgres have an unsigned 64-bit column type.

pub mod prelude;

pub mod audit_log;
pub mod ban;
pub mod channel_message_format;
pub mod embed_config;
pub mod guild;
pub mod moderation_config;
pub mod mute;
pub mod prune;
pub mod reminder;
pub mod role_menu;
pub mod role_menu_option;
pub mod server_booster;
pub mod tag;
pub mod ticket;
pub mod ticketing_config;
