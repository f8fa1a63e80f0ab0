//! SQLite-backed access to the `spaceships` table.
//!
//! The table itself is an external precondition: it is created and seeded
//! outside this system, and this module never writes to it.

use std::path::Path;
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::error::{Error, Result};
use crate::model::Spaceship;

/// Capability set for a spaceship storage backend.
///
/// Any backend implementing these two reads with the same error semantics is
/// substitutable behind the service: `list_all` yields an empty vector for an
/// empty table, and `fetch_by_id` fails with [`Error::SpaceshipNotFound`]
/// instead of producing a zero-valued record.
pub trait SpaceshipStore: Send + Sync {
    /// Retrieve every spaceship, in the store's natural row order.
    fn list_all(&self) -> Result<Vec<Spaceship>>;

    /// Retrieve the spaceship with the given identifier.
    fn fetch_by_id(&self, id: i64) -> Result<Spaceship>;
}

/// Store implementation over a single process-lifetime SQLite handle.
///
/// The connection is shared read-only across all request handlers, so it sits
/// behind a mutex; the handle is opened once at construction and never closed
/// explicitly.
#[derive(Clone)]
pub struct SqliteSpaceshipStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteSpaceshipStore {
    /// Open the store at the given database path.
    ///
    /// Fails with [`Error::DatabaseNotFound`] when the file does not exist,
    /// so a misconfigured path is fatal at startup instead of silently
    /// creating an empty database.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::DatabaseNotFound {
                path: path.to_path_buf(),
            });
        }

        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened spaceships database");

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

impl SpaceshipStore for SqliteSpaceshipStore {
    fn list_all(&self) -> Result<Vec<Spaceship>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, name FROM spaceships")?;
        let rows = stmt.query_map([], |row| {
            Ok(Spaceship {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })?;

        let mut spaceships = Vec::new();
        for entry in rows {
            spaceships.push(entry?);
        }
        Ok(spaceships)
    }

    fn fetch_by_id(&self, id: i64) -> Result<Spaceship> {
        let conn = self.conn.lock().unwrap();
        let spaceship = conn
            .query_row("SELECT id, name FROM spaceships WHERE id = ?1", [id], |row| {
                Ok(Spaceship {
                    id: row.get(0)?,
                    name: row.get(1)?,
                })
            })
            .optional()?;

        spaceship.ok_or(Error::SpaceshipNotFound { id })
    }
}
