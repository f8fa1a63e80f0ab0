use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the spaceships library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Database file could not be located at the configured path.
    #[error("database not found at {path}")]
    DatabaseNotFound { path: PathBuf },

    /// Raised when no spaceship row matches the requested identifier.
    #[error("no spaceship found with id {id}")]
    SpaceshipNotFound { id: i64 },

    /// Wrapper for SQLite errors.
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

impl Error {
    /// Whether this error is the missing-row case of `fetch_by_id`.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::SpaceshipNotFound { .. })
    }
}
