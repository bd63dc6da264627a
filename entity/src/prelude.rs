pub use super::audit_log::Entity as AuditLog;
pub use super::ban::Entity as Ban;
pub use super::channel_message_format::Entity as ChannelMessageFormat;
pub use super::embed_config::Entity as EmbedConfig;
pub use super::guild::Entity as Guild;
pub use super::moderation_config::Entity as ModerationConfig;
pub use super::mute::Entity as Mute;
pub use super::prune::Entity as Prune;
pub use super::reminder::Entity as Reminder;
pub use super::role_menu::Entity as RoleMenu;
pub use super::role_menu_option::Entity as RoleMenuOption;
pub use super::server_booster::Entity as ServerBooster;
pub use super::tag::Entity as Tag;
pub use super::ticket::Entity as Ticket;
pub use super::ticketing_config::Entity as TicketingConfig;
