//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into domain parameters, call a
//! service and convert the result back into a DTO.

pub mod audit_log;
pub mod auth;
pub mod guild;
pub mod moderation;
pub mod param;
pub mod tag;
pub mod ticket;
