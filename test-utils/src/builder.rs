use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Class, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Class)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// CREATE INDEX statements executed after all tables exist.
    indexes: Vec<IndexCreateStatement>,
    /// Connection pool size of the test database.
    connections: u32,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
            connections: 1,
        }
    }

    /// Backs the test database with a temporary SQLite file shared by `connections`
    /// pooled connections.
    ///
    /// Needed by tests where concurrent transactions must contend for the database lock;
    /// a single in-memory connection runs them one after another.
    pub fn with_connections(mut self, connections: u32) -> Self {
        self.connections = connections;
        self
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index the entity definitions cannot express, such as a composite unique key.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds every table used by the reservation and settlement workflow.
    ///
    /// Tables are added in dependency order:
    /// - User
    /// - Class
    /// - Reservation
    /// - Payment
    /// - PaymentItem
    ///
    /// Also adds the unique (student_email, class_id) index on reservations.
    pub fn with_enrollment_tables(self) -> Self {
        self.with_table(User)
            .with_table(Class)
            .with_table(Reservation)
            .with_table(Payment)
            .with_table(PaymentItem)
            .with_index(
                Index::create()
                    .name("idx_reservation_student_class")
                    .table(Reservation)
                    .col(entity::reservation::Column::StudentEmail)
                    .col(entity::reservation::Column::ClassId)
                    .unique()
                    .to_owned(),
            )
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::TempDir)` - Failed to create the directory for a file-backed database
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::with_connections(self.connections);

        setup.with_tables(self.tables).await?;
        setup.with_indexes(self.indexes).await?;

        Ok(setup)
    }
}
