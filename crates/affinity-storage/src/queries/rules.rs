//! Ranked rule and category-pair persistence.

use rusqlite::{params, Connection};

use affinity_core::StorageError;

/// A persisted association rule row.
///
/// Mirrors the engine's scored-rule shape; `rank` is the position in the
/// ranked table at the time it was written.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRuleRecord {
    pub product_1: String,
    pub product_2: String,
    pub orders: i64,
    pub support: f64,
    pub confidence: f64,
    pub confidence_reverse: f64,
    pub lift: f64,
}

/// A persisted category-pair count row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryPairRecord {
    pub category_1: String,
    pub category_2: String,
    pub orders: i64,
}

/// Replace the persisted rule table with a freshly ranked set.
///
/// The incoming slice is assumed already ranked; its order is stored in
/// the `rank` column so reads reproduce it.
pub fn replace_association_rules(
    conn: &mut Connection,
    rules: &[AssociationRuleRecord],
) -> Result<(), StorageError> {
    let tx = conn.transaction().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    {
        tx.execute("DELETE FROM association_rules", [])
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO association_rules
                 (product_1, product_2, orders, support, confidence, confidence_reverse, lift, rank)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
        for (rank, rule) in rules.iter().enumerate() {
            stmt.execute(params![
                rule.product_1,
                rule.product_2,
                rule.orders,
                rule.support,
                rule.confidence,
                rule.confidence_reverse,
                rule.lift,
                rank as i64,
            ])
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
        }
    }
    tx.commit().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })
}

/// Load the top `limit` rules in stored rank order.
pub fn load_top_rules(
    conn: &Connection,
    limit: usize,
) -> Result<Vec<AssociationRuleRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT product_1, product_2, orders, support, confidence, confidence_reverse, lift
             FROM association_rules ORDER BY rank LIMIT ?1",
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(AssociationRuleRecord {
                product_1: row.get(0)?,
                product_2: row.get(1)?,
                orders: row.get(2)?,
                support: row.get(3)?,
                confidence: row.get(4)?,
                confidence_reverse: row.get(5)?,
                lift: row.get(6)?,
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

/// Replace the persisted category-pair counts.
pub fn replace_category_pairs(
    conn: &mut Connection,
    pairs: &[CategoryPairRecord],
) -> Result<(), StorageError> {
    let tx = conn.transaction().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    {
        tx.execute("DELETE FROM category_pairs", [])
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO category_pairs (category_1, category_2, orders) VALUES (?1, ?2, ?3)",
            )
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;
        for pair in pairs {
            stmt.execute(params![pair.category_1, pair.category_2, pair.orders])
                .map_err(|e| StorageError::SqliteError {
                    message: e.to_string(),
                })?;
        }
    }
    tx.commit().map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })
}

/// Load all category-pair counts, largest first.
pub fn load_category_pairs(conn: &Connection) -> Result<Vec<CategoryPairRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT category_1, category_2, orders FROM category_pairs
             ORDER BY orders DESC, category_1, category_2",
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(CategoryPairRecord {
                category_1: row.get(0)?,
                category_2: row.get(1)?,
                orders: row.get(2)?,
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
