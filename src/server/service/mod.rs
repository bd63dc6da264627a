//! Service layer for business logic and orchestration.
//!
//! Services sit between the callers (slash command handlers, REST controllers and scheduler
//! jobs) and the data layer. They are responsible for:
//!
//! - **Business Logic**: Enforcing moderation and ticket rules
//! - **Orchestration**: Coordinating repository calls with Discord API calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Side Effects**: Writing audit log entries and posting log channel embeds
//!
//! Every service borrows the database connection and, where it talks to Discord, holds the
//! bot's `Arc<Http>`. Errors are returned as `AppError`; callers decide whether to reply to a
//! user, answer an HTTP request or log and move on.

pub mod audit_log;
pub mod auth;
pub mod ban;
pub mod booster;
pub mod embed;
pub mod guild;
pub mod message_format;
pub mod moderation_log;
pub mod mute;
pub mod prune;
pub mod reminder;
pub mod role_menu;
pub mod tag;
pub mod ticket;
pub mod transcript;

#[cfg(test)]
mod test;
