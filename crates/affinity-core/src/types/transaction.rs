//! Transaction row types shared between storage and analysis.

use serde::{Deserialize, Serialize};

use super::identifiers::{CategoryId, ItemId, OrderId};
use super::interning::BasketInterner;

/// A raw transaction-item row as supplied by the transaction store.
///
/// One row per (order, item) line. An order with several items spans
/// several rows, and a quantity above one may repeat the same row; the
/// engine treats repeats as a single membership fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransactionRow {
    pub order_id: String,
    pub item_id: String,
    pub category: String,
}

impl RawTransactionRow {
    pub fn new(
        order_id: impl Into<String>,
        item_id: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            item_id: item_id.into(),
            category: category.into(),
        }
    }
}

/// An interned transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionRow {
    pub order: OrderId,
    pub item: ItemId,
    pub category: CategoryId,
}

impl TransactionRow {
    /// Intern a raw row's identifiers.
    pub fn intern(raw: &RawTransactionRow, interner: &BasketInterner) -> Self {
        Self {
            order: interner.intern_order(&raw.order_id),
            item: interner.intern_item(&raw.item_id),
            category: interner.intern_category(&raw.category),
        }
    }
}
