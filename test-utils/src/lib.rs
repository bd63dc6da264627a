//! Lisbeth Test Utils
//!
//! Shared testing utilities for the bot's repository, service and handler tests. Provides a
//! builder for in-memory SQLite test contexts, entity factories, and Serenity object fakes.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with sensible defaults
//! - **serenity**: Builds Serenity models from JSON the way Discord would send them
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn mutes_are_scoped_to_guild() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_moderation_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let guild = factory::create_guild(db).await?;
//!     let mute = factory::create_mute(db, guild.guild_id, 42).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
