//! Transaction row queries.

use rusqlite::{params, Connection};

use affinity_core::types::RawTransactionRow;
use affinity_core::StorageError;

/// Load every transaction-item row.
pub fn load_transaction_rows(conn: &Connection) -> Result<Vec<RawTransactionRow>, StorageError> {
    let mut stmt = conn
        .prepare_cached("SELECT order_id, item_id, category FROM transactions")
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(RawTransactionRow {
                order_id: row.get(0)?,
                item_id: row.get(1)?,
                category: row.get(2)?,
            })
        })
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?);
    }
    Ok(result)
}

/// Batch-insert rows inside one transaction. Returns the inserted count.
pub fn insert_transaction_rows(
    conn: &mut Connection,
    rows: &[RawTransactionRow],
) -> Result<usize, StorageError> {
    let tx = conn.transaction().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    {
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO transactions (order_id, item_id, category) VALUES (?1, ?2, ?3)",
            )
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
        for row in rows {
            stmt.execute(params![row.order_id, row.item_id, row.category])
                .map_err(|e| StorageError::SqliteError {
                    message: e.to_string(),
                })?;
        }
    }
    tx.commit().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(rows.len())
}
