use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for test contexts backed by an in-memory SQLite database.
///
/// Add the entity tables a test needs, then call `build()`. Tables referenced by foreign keys
/// (the guild table in particular) should be added before the tables that reference them.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Guild, Tag};
///
/// let test = TestBuilder::new()
///     .with_table(Guild)
///     .with_table(Tag)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements, executed in insertion order by `build()`.
    tables: Vec<TableCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a builder with no tables.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// The statement is generated with SeaORM's schema builder for the SQLite backend and
    /// executed when `build()` is called.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the guild table and the per-guild configuration tables.
    ///
    /// Adds, in order: `Guild`, `EmbedConfig`, `ModerationConfig`, `TicketingConfig`.
    pub fn with_guild_tables(self) -> Self {
        self.with_table(Guild)
            .with_table(EmbedConfig)
            .with_table(ModerationConfig)
            .with_table(TicketingConfig)
    }

    /// Adds everything the moderation actions touch.
    ///
    /// Guild tables plus `Mute`, `Ban`, `Prune` and `AuditLog`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_moderation_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_moderation_tables(self) -> Self {
        self.with_guild_tables()
            .with_table(Mute)
            .with_table(Ban)
            .with_table(Prune)
            .with_table(AuditLog)
    }

    /// Guild tables plus `Ticket` and `AuditLog`.
    pub fn with_ticket_tables(self) -> Self {
        self.with_guild_tables()
            .with_table(Ticket)
            .with_table(AuditLog)
    }

    /// Guild tables plus `RoleMenu` and `RoleMenuOption`.
    pub fn with_role_menu_tables(self) -> Self {
        self.with_guild_tables()
            .with_table(RoleMenu)
            .with_table(RoleMenuOption)
    }

    /// Builds the test context, creating every configured table.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database connected and tables created
    /// - `Err(TestError::Database)` - Failed to connect or create a table
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}
