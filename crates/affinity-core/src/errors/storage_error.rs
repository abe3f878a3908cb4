//! Storage errors.

/// Errors that can occur while reading or writing the SQLite store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {message}")]
    SqliteError { message: String },

    #[error("migration to schema version {version} failed: {message}")]
    MigrationFailed { version: i64, message: String },
}
