//! Error types for the projects application.

use thiserror::Error;

/// Result type alias for projects operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the menu loop.
#[derive(Error, Debug)]
pub enum Error {
    /// Text entered where an integer was expected
    #[error("{0} is not a valid number.")]
    InvalidNumber(String),

    /// Text entered where a decimal was expected
    #[error("{0} is not a valid decimal number.")]
    InvalidDecimal(String),

    #[error("A value for {0} is required.")]
    MissingField(&'static str),

    /// No project row with the given ID
    #[error("Project with ID = {0} does not exist.")]
    NotFound(i64),

    #[error("No project is currently selected.")]
    NoProjectSelected,

    #[error("Input stream closed.")]
    InputClosed,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
