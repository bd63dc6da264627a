//! Fake Serenity models for tests.
//!
//! Each fake is deserialized from the JSON Discord would send, so the resulting structs are
//! exactly what the bot receives at runtime.
//!
//! ```rust,ignore
//! use test_utils::serenity::{create_test_member, create_test_role};
//!
//! let moderator = create_test_role(111, "Moderator", Permissions::BAN_MEMBERS);
//! let booster = create_test_member(1, 222, &[111], Some("2024-01-01T00:00:00Z"));
//! ```

pub mod member;
pub mod role;

pub use member::create_test_member;
pub use role::create_test_role;
