//! String interning for order, item, and category identifiers.
//!
//! Uses one `lasso::ThreadedRodeo` per identifier kind, so an order id
//! and an item name with the same spelling can never collapse into the
//! same key space. Thread-safe during the load phase.

use lasso::ThreadedRodeo;

use super::identifiers::{CategoryId, ItemId, OrderId};

/// Interner for the three identifier kinds of a transaction log.
///
/// Identifiers are trimmed of surrounding whitespace before interning,
/// so `" ord_1 "` and `"ord_1"` resolve to the same key.
pub struct BasketInterner {
    orders: ThreadedRodeo,
    items: ThreadedRodeo,
    categories: ThreadedRodeo,
}

impl BasketInterner {
    /// Create an empty interner.
    pub fn new() -> Self {
        Self {
            orders: ThreadedRodeo::default(),
            items: ThreadedRodeo::default(),
            categories: ThreadedRodeo::default(),
        }
    }

    /// Intern an order identifier.
    pub fn intern_order(&self, id: &str) -> OrderId {
        OrderId::new(self.orders.get_or_intern(id.trim()))
    }

    /// Intern an item (product) identifier.
    pub fn intern_item(&self, name: &str) -> ItemId {
        ItemId::new(self.items.get_or_intern(name.trim()))
    }

    /// Intern a category identifier.
    pub fn intern_category(&self, name: &str) -> CategoryId {
        CategoryId::new(self.categories.get_or_intern(name.trim()))
    }

    /// Look up a previously interned item without inserting.
    pub fn get_item(&self, name: &str) -> Option<ItemId> {
        self.items.get(name.trim()).map(ItemId::new)
    }

    /// Resolve an order id back to its string.
    pub fn resolve_order(&self, id: OrderId) -> &str {
        self.orders.resolve(&id.inner())
    }

    /// Resolve an item id back to its string.
    pub fn resolve_item(&self, id: ItemId) -> &str {
        self.items.resolve(&id.inner())
    }

    /// Resolve a category id back to its string.
    pub fn resolve_category(&self, id: CategoryId) -> &str {
        self.categories.resolve(&id.inner())
    }

    /// Number of distinct items seen so far.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Number of distinct orders seen so far.
    pub fn order_count(&self) -> usize {
        self.orders.len()
    }
}

impl Default for BasketInterner {
    fn default() -> Self {
        Self::new()
    }
}
