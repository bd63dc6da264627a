mod audit_log;
mod ban;
mod channel_message_format;
mod embed_config;
mod guild;
mod moderation_config;
mod mute;
mod prune;
mod reminder;
mod role_menu;
mod server_booster;
mod tag;
mod ticket;
mod ticketing_config;
