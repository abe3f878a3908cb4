//! Connection management.

mod pragmas;

pub use pragmas::{apply_pragmas, apply_read_pragmas};

use std::path::Path;

use rusqlite::Connection;

use affinity_core::StorageError;

/// Open (or create) an affinity database and apply the write pragmas.
///
/// Migrations are a separate step; callers run
/// [`crate::migrations::run_migrations`] after opening.
pub fn open(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
        message: format!("failed to open {}: {e}", path.display()),
    })?;
    apply_pragmas(&conn)?;
    Ok(conn)
}

/// Open an existing database for read-only querying.
pub fn open_read_only(path: &Path) -> Result<Connection, StorageError> {
    let conn = Connection::open(path).map_err(|e| StorageError::SqliteError {
        message: format!("failed to open {}: {e}", path.display()),
    })?;
    apply_read_pragmas(&conn)?;
    Ok(conn)
}

/// In-memory database for tests and ephemeral runs.
pub fn open_in_memory() -> Result<Connection, StorageError> {
    let conn = Connection::open_in_memory().map_err(|e| StorageError::SqliteError {
        message: format!("failed to open in-memory database: {e}"),
    })?;
    apply_pragmas(&conn)?;
    Ok(conn)
}
