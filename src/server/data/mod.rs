//! Database repository layer for all domain entities.
//!
//! Each repository borrows the connection and performs the queries for one table. Entity
//! models never leave this layer: results are converted into the domain models in
//! `server::model`, with stored `i64` snowflakes turned back into `u64`.

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
pub mod server_booster;
pub mod tag;
pub mod ticket;
pub mod ticketing_config;

#[cfg(test)]
mod test;
