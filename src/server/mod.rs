//! Server-side API backend and business logic.
//!
//! Lisbeth is a Discord moderation and utility bot with a REST API for moderators. Both
//! front ends share the service, data and model layers. Axum serves the API, SeaORM stores
//! state in SQLite and Serenity talks to Discord.
//!
//! # Layout
//!
//! - `bot/` - Gateway event handlers, slash commands, context menus and components
//! - `controller/` - REST endpoints; each checks guild permissions before calling a service
//! - `service/` - Moderation rules and the Discord side effects that go with them
//! - `data/` - Repositories mapping SeaORM entities to domain models
//! - `model/` - Domain models and the params each service operation takes
//! - `error/` - `AppError`, its domain variants and their HTTP and Discord renderings
//! - `middleware/` - Session access and the `AuthGuard` permission checks
//! - `scheduler/` - Cron jobs lifting expired punishments, sending reminders and cleaning tickets
//! - `config`, `startup`, `state`, `router` - Process wiring
//! - `util/` - Duration, colour and timestamp parsing, and the task queue
//!
//! A slash command and the matching REST endpoint end up in the same service method. The
//! command module and the controller differ only in how they read input, check permissions
//! and render the result.

pub mod bot;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
