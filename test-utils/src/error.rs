use thiserror::Error;

/// Errors that can occur while preparing a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// Failed to connect to the test database or create a table.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
    /// Failed to create the temporary directory of a file-backed database.
    #[error("Failed to create temporary database directory: {0}")]
    TempDir(#[from] std::io::Error),
}
