use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Database connection and session for a single test.
///
/// Both are created lazily and live as long as the context. The session is stored in the
/// same in-memory database as the entity tables.
pub struct TestContext {
    /// In-memory SQLite connection, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by `db`, created by `session()`.
    pub session: Option<Session>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates an empty context with no connection yet.
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Gets or creates the in-memory SQLite connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - The connection owned by this context
    /// - `Err(TestError::Database)` - Failed to connect
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Executes the given CREATE TABLE statements in order.
    ///
    /// Normally called by `TestBuilder::build()`.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Gets or creates a session stored in the test database.
    ///
    /// The first call migrates the session table. Later calls return the same session.
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    /// session.insert("auth:user", 123u64).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let session_store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
                session_store
                    .migrate()
                    .await
                    .map_err(|e| TestError::Session(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(session_store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Gets or creates both the connection and the session.
    ///
    /// Avoids holding two mutable borrows when a test needs both.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Session("context not initialized".to_string())),
        }
    }
}
