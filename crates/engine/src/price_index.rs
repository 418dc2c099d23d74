//! Price-ordered index over the canonical product map
//!
//! # Live, not snapshot
//!
//! The index holds `(price, seq, id)` keys, never product copies. Callers
//! resolve ids through the canonical map, so traversals always show current
//! quantity and supplier. Price changes must go through [`PriceIndex::reprice`]
//! in the same mutation that writes the new price; `ProductStore` is the only
//! caller and does exactly that.
//!
//! # Ordering
//!
//! Keys order by price, then by insertion sequence. Ascending traversal
//! therefore lists equal prices oldest first; descending traversal is its
//! exact reverse.

use std::collections::BTreeSet;

use stockroom_core::{Price, PriceOrder, ProductId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct PriceKey {
    price: Price,
    seq: u64,
    id: ProductId,
}

/// Ordered `(price, insertion sequence) -> id` index
#[derive(Debug, Default, Clone)]
pub struct PriceIndex {
    keys: BTreeSet<PriceKey>,
}

impl PriceIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of indexed products
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Index a product. Returns false if the exact key was already present.
    pub fn insert(&mut self, price: Price, seq: u64, id: ProductId) -> bool {
        self.keys.insert(PriceKey { price, seq, id })
    }

    /// Move a product from `old` to `new` price.
    ///
    /// Returns false if no entry existed at `old`; the new key is inserted
    /// either way so the index never loses a product.
    pub fn reprice(&mut self, old: Price, new: Price, seq: u64, id: ProductId) -> bool {
        let removed = self.keys.remove(&PriceKey {
            price: old,
            seq,
            id,
        });
        self.keys.insert(PriceKey {
            price: new,
            seq,
            id,
        });
        removed
    }

    /// Ids cheapest first
    pub fn ascending(&self) -> impl DoubleEndedIterator<Item = ProductId> + '_ {
        self.keys.iter().map(|k| k.id)
    }

    /// Ids most expensive first
    pub fn descending(&self) -> impl Iterator<Item = ProductId> + '_ {
        self.ascending().rev()
    }

    /// Ids in the requested direction
    pub fn ids(&self, order: PriceOrder) -> Box<dyn Iterator<Item = ProductId> + '_> {
        match order {
            PriceOrder::Ascending => Box::new(self.ascending()),
            PriceOrder::Descending => Box::new(self.descending()),
        }
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
