use std::time::Duration;

use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement},
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection for a single test.
///
/// By default the database is an in-memory SQLite instance behind a single connection.
/// Contexts built with more than one connection use a SQLite file in a temporary directory
/// instead, so concurrent transactions run on separate connections and contend for the
/// database lock the way they do in production. The database is created lazily on first
/// access and persists for the lifetime of the test context.
pub struct TestContext {
    /// Database connection, once initialized.
    pub db: Option<DatabaseConnection>,
    /// Pool size; above 1 the database lives in `dir`.
    connections: u32,
    /// Holds the database file of a multi-connection context until the context drops.
    dir: Option<TempDir>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context with no database connection.
    pub fn new() -> Self {
        Self::with_connections(1)
    }

    /// Creates a new empty test context whose pool holds `connections` connections.
    pub fn with_connections(connections: u32) -> Self {
        Self {
            db: None,
            connections: connections.max(1),
            dir: None,
        }
    }

    /// Gets or creates the test database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to the SQLite database
    /// - `Err(TestError::TempDir)` - Failed to create the directory for the database file
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let mut options = if self.connections > 1 {
                    let dir = self.dir.insert(tempfile::tempdir()?);
                    let path = dir.path().join("enrollment.db");
                    ConnectOptions::new(format!("sqlite://{}?mode=rwc", path.display()))
                } else {
                    // Every in-memory SQLite connection is a separate database.
                    ConnectOptions::new("sqlite::memory:")
                };
                options
                    .max_connections(self.connections)
                    .min_connections(1)
                    .sqlx_logging(false)
                    .map_sqlx_sqlite_opts(|opts| opts.busy_timeout(Duration::from_secs(5)));
                let db = Database::connect(options).await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Creates indexes after the tables they belong to.
    ///
    /// # Returns
    /// - `Ok(())` - All indexes created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more indexes
    pub async fn with_indexes(
        &mut self,
        stmts: Vec<IndexCreateStatement>,
    ) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }
}
