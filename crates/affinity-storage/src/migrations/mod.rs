//! Versioned schema migrations.
//!
//! The `user_version` pragma tracks the applied schema version; each
//! migration runs inside one transaction and bumps it.

use rusqlite::Connection;
use tracing::info;

use affinity_core::StorageError;

/// Current schema version.
pub const SCHEMA_VERSION: i64 = 1;

/// Bring the database schema up to [`SCHEMA_VERSION`].
///
/// Idempotent: already-migrated databases are left untouched.
pub fn run_migrations(conn: &Connection) -> Result<(), StorageError> {
    let version: i64 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to read user_version: {e}"),
        })?;

    if version < 1 {
        apply_v001(conn)?;
        info!(version = 1, "applied schema migration");
    }
    Ok(())
}

/// v001: transaction input table plus the two derived output tables.
///
/// `transactions` has no uniqueness constraint: an (order_id, item_id)
/// combination may legitimately repeat when a quantity exceeds one; the
/// engine collapses repeats itself.
fn apply_v001(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        BEGIN;
        CREATE TABLE IF NOT EXISTS transactions (
            order_id TEXT NOT NULL,
            item_id  TEXT NOT NULL,
            category TEXT NOT NULL DEFAULT ''
        );
        CREATE INDEX IF NOT EXISTS idx_transactions_order
            ON transactions(order_id);

        CREATE TABLE IF NOT EXISTS association_rules (
            product_1          TEXT    NOT NULL,
            product_2          TEXT    NOT NULL,
            orders             INTEGER NOT NULL,
            support            REAL    NOT NULL,
            confidence         REAL    NOT NULL,
            confidence_reverse REAL    NOT NULL,
            lift               REAL    NOT NULL,
            rank               INTEGER NOT NULL,
            PRIMARY KEY (product_1, product_2)
        );

        CREATE TABLE IF NOT EXISTS category_pairs (
            category_1 TEXT    NOT NULL,
            category_2 TEXT    NOT NULL,
            orders     INTEGER NOT NULL,
            PRIMARY KEY (category_1, category_2)
        );

        PRAGMA user_version = 1;
        COMMIT;
        ",
    )
    .map_err(|e| StorageError::MigrationFailed {
        version: 1,
        message: e.to_string(),
    })
}
