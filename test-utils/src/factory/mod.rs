//! Factory methods for creating test data.
//!
//! Each entity has a factory module with either a `Factory` builder for customization and a
//! `create_*` shorthand, or just the shorthand when there is nothing worth customizing.
//! Snowflake columns default to unique values from [`helpers::next_snowflake`].
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let guild = factory::create_guild(&db).await?;
//! let mute = factory::create_mute(&db, guild.guild_id, 42).await?;
//!
//! let (guild, ticketing) = factory::helpers::create_guild_with_ticketing(&db).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let mute = factory::mute::MuteFactory::new(&db, guild.guild_id, 42)
//!     .applied_until(None)
//!     .reason(Some("spam".to_string()))
//!     .build()
//!     .await?;
//! ```

pub mod ban;
pub mod embed_config;
pub mod guild;
pub mod helpers;
pub mod moderation_config;
pub mod mute;
pub mod reminder;
pub mod role_menu;
pub mod server_booster;
pub mod tag;
pub mod ticket;
pub mod ticketing_config;

pub use ban::create_ban;
pub use embed_config::create_embed_config;
pub use guild::create_guild;
pub use mute::create_mute;
pub use reminder::create_reminder;
pub use role_menu::{create_role_menu, create_role_menu_option};
pub use server_booster::create_server_booster;
pub use tag::create_tag;
pub use ticket::create_ticket;
pub use ticketing_config::create_ticketing_config;
