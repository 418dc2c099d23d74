//! ProductStore: canonical product map plus derived views
//!
//! ## Design
//!
//! The store owns every `Product` in one canonical `HashMap<ProductId, _>`.
//! All other views hold ids and are resolved through that map at read time:
//!
//! - name index: `BTreeMap<String, Vec<ProductId>>`, a multi-map; ids under
//!   one name stay in insertion order
//! - insertion-ordered view: `Vec<ProductId>`
//! - price index: see [`PriceIndex`]
//!
//! No view ever holds a reference into the map, so rehashing can never
//! invalidate one, and every view is live: an update through the canonical
//! map is visible everywhere immediately.
//!
//! ## Invariants
//!
//! - Every id in a derived view is a key of the canonical map, and every
//!   key appears exactly once in the insertion view and the price index.
//! - Ids are unique; a duplicate insert changes nothing.
//! - `id` and `name` never change after insert. Only quantity and price do.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;

use stockroom_core::{Error, Price, PriceOrder, Product, ProductId, Result};
use tracing::{debug, info, warn};

use crate::price_index::PriceIndex;

#[derive(Debug, Clone)]
struct Slot {
    product: Product,
    /// Insertion sequence, the tie-breaker in the price index
    seq: u64,
}

/// What to do with a persisted line that does not decode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Report the line and keep loading
    #[default]
    Skip,
    /// Fail the whole load; the store is left untouched
    Abort,
}

impl FromStr for LoadPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "skip" => Ok(LoadPolicy::Skip),
            "abort" => Ok(LoadPolicy::Abort),
            other => Err(Error::Config(format!(
                "invalid load_policy '{}'. Expected \"skip\" or \"abort\".",
                other
            ))),
        }
    }
}

impl fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPolicy::Skip => f.write_str("skip"),
            LoadPolicy::Abort => f.write_str("abort"),
        }
    }
}

/// A line skipped during load
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedLine {
    /// 1-based line number
    pub line: usize,
    /// Why it did not decode
    pub reason: String,
}

/// Outcome of [`ProductStore::load_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Products inserted
    pub loaded: usize,
    /// Ids skipped because they were already present
    pub duplicates: Vec<ProductId>,
    /// Lines skipped under `LoadPolicy::Skip`
    pub malformed: Vec<MalformedLine>,
}

impl LoadReport {
    /// Whether every non-blank line was loaded
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.malformed.is_empty()
    }
}

/// Multi-index in-memory product store
#[derive(Debug, Default)]
pub struct ProductStore {
    products: HashMap<ProductId, Slot>,
    by_name: BTreeMap<String, Vec<ProductId>>,
    insertion_order: Vec<ProductId>,
    by_price: PriceIndex,
    next_seq: u64,
}

impl ProductStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Whether a product with `id` exists
    pub fn contains(&self, id: ProductId) -> bool {
        self.products.contains_key(&id)
    }

    /// Insert a new product.
    ///
    /// Fails with `DuplicateId` if the id is taken; nothing is changed then.
    pub fn insert(&mut self, product: Product) -> Result<()> {
        let id = product.id;
        if self.products.contains_key(&id) {
            return Err(Error::DuplicateId { id });
        }

        let seq = self.next_seq;
        self.next_seq += 1;

        self.insertion_order.push(id);
        self.by_name.entry(product.name.clone()).or_default().push(id);
        self.by_price.insert(product.price, seq, id);
        debug!(target: "stockroom::store", %id, name = %product.name, "Product inserted");
        self.products.insert(id, Slot { product, seq });
        Ok(())
    }

    /// Canonical lookup by id
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id).map(|slot| &slot.product)
    }

    /// Products named exactly `name`, in insertion order
    pub fn find_by_name(&self, name: &str) -> Vec<&Product> {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .filter_map(|id| self.get(*id))
            .collect()
    }

    /// Set the stock level of an existing product.
    ///
    /// A missing id is `NotFound`; no product is created.
    pub fn update_quantity(&mut self, id: ProductId, quantity: u32) -> Result<&Product> {
        let slot = self.products.get_mut(&id).ok_or(Error::NotFound { id })?;
        let old = std::mem::replace(&mut slot.product.quantity, quantity);
        debug!(target: "stockroom::store", %id, old, new = quantity, "Quantity updated");
        Ok(&slot.product)
    }

    /// Set the price of an existing product and re-key the price index.
    ///
    /// A missing id is `NotFound`; no product is created.
    pub fn update_price(&mut self, id: ProductId, price: Price) -> Result<&Product> {
        let slot = self.products.get_mut(&id).ok_or(Error::NotFound { id })?;
        let old = std::mem::replace(&mut slot.product.price, price);
        self.by_price.reprice(old, price, slot.seq, id);
        debug!(target: "stockroom::store", %id, %old, new = %price, "Price updated");
        Ok(&slot.product)
    }

    /// All products in insertion order
    pub fn all(&self) -> impl Iterator<Item = &Product> + '_ {
        self.insertion_order.iter().filter_map(|id| self.get(*id))
    }

    /// All products cheapest first; equal prices oldest first
    pub fn ascending_by_price(&self) -> impl Iterator<Item = &Product> + '_ {
        self.in_price_order(PriceOrder::Ascending)
    }

    /// All products most expensive first; exact reverse of ascending
    pub fn descending_by_price(&self) -> impl Iterator<Item = &Product> + '_ {
        self.in_price_order(PriceOrder::Descending)
    }

    /// All products in the given price direction
    pub fn in_price_order(&self, order: PriceOrder) -> impl Iterator<Item = &Product> + '_ {
        self.by_price.ids(order).filter_map(|id| self.get(id))
    }

    /// All products by name (byte order); equal names in insertion order
    pub fn sorted_by_name(&self) -> impl Iterator<Item = &Product> + '_ {
        self.by_name
            .values()
            .flatten()
            .filter_map(|id| self.get(*id))
    }

    /// Decode and insert persisted lines.
    ///
    /// Lines are raw bytes; one that is not UTF-8 is malformed like any
    /// other undecodable line. Blank lines are ignored. Duplicate ids are
    /// reported and skipped. Malformed lines follow `policy`: under `Abort`
    /// the first one is returned as the error before anything is inserted.
    pub fn load_all<I, S>(&mut self, lines: I, policy: LoadPolicy) -> Result<LoadReport>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<[u8]>,
    {
        let mut report = LoadReport::default();
        let mut decoded = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line_no = idx + 1;
            let parsed = match std::str::from_utf8(line.as_ref()) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => Product::decode(text),
                Err(e) => Err(Error::malformed(format!(
                    "not valid UTF-8 after byte {}",
                    e.valid_up_to()
                ))),
            };

            match parsed {
                Ok(product) => decoded.push(product),
                Err(e) => {
                    let e = e.at_line(line_no);
                    if policy == LoadPolicy::Abort {
                        return Err(e);
                    }
                    let reason = match e {
                        Error::MalformedRecord { reason, .. } => reason,
                        other => other.to_string(),
                    };
                    warn!(target: "stockroom::store", line = line_no, %reason, "Skipping malformed line");
                    report.malformed.push(MalformedLine {
                        line: line_no,
                        reason,
                    });
                }
            }
        }

        for product in decoded {
            match self.insert(product) {
                Ok(()) => report.loaded += 1,
                Err(Error::DuplicateId { id }) => {
                    warn!(target: "stockroom::store", %id, "Product already exists, skipping duplicate");
                    report.duplicates.push(id);
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            target: "stockroom::store",
            loaded = report.loaded,
            duplicates = report.duplicates.len(),
            malformed = report.malformed.len(),
            "Products loaded"
        );
        Ok(report)
    }

    /// Empty the store, returning every product with its encoded line.
    ///
    /// Order follows the canonical map and is unspecified.
    pub fn drain_all(&mut self) -> Vec<(Product, String)> {
        let drained: Vec<(Product, String)> = self
            .products
            .drain()
            .map(|(_, slot)| {
                let line = slot.product.encode();
                (slot.product, line)
            })
            .collect();

        self.by_name.clear();
        self.insertion_order.clear();
        self.by_price.clear();
        self.next_seq = 0;
        drained
    }
}
