//! Data transfer objects exchanged with REST API clients.

pub mod api;
pub mod audit_log;
pub mod guild;
pub mod moderation;
pub mod serde_id;
pub mod tag;
pub mod ticket;
pub mod user;
