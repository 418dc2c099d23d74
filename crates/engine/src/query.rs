//! Read-only queries over a `ProductStore`
//!
//! Every query borrows the store and returns references into it. Nothing
//! here mutates state.
//!
//! Iteration sources:
//!
//! | Query | Order |
//! |-------|-------|
//! | `sorted_by_name` | name, byte-lexicographic, stable |
//! | `filter_exact_price`, `filter_price_range` | ascending price |
//! | `filter_quantity_range`, `filter_low_stock` | ascending price |
//! | `search_by_suffix`, `search_by_name_ignore_case` | insertion |

use stockroom_core::{Price, Product};

use crate::store::ProductStore;

/// Query engine bound to one store
#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    store: &'a ProductStore,
    price_tolerance: f64,
}

impl<'a> QueryEngine<'a> {
    /// Create a query engine with exact price matching
    pub fn new(store: &'a ProductStore) -> Self {
        QueryEngine {
            store,
            price_tolerance: 0.0,
        }
    }

    /// Absolute tolerance for `filter_exact_price`.
    ///
    /// Negative or NaN values fall back to `0.0` (exact match).
    pub fn with_price_tolerance(mut self, tolerance: f64) -> Self {
        self.price_tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            0.0
        };
        self
    }

    /// Current exact-price tolerance
    pub fn price_tolerance(&self) -> f64 {
        self.price_tolerance
    }

    /// Every product sorted by name, ties in insertion order
    pub fn sorted_by_name(&self) -> Vec<&'a Product> {
        self.store.sorted_by_name().collect()
    }

    /// Products whose price equals `price` within the configured tolerance
    pub fn filter_exact_price(&self, price: Price) -> Vec<&'a Product> {
        let tolerance = self.price_tolerance;
        self.by_price_where(|p| p.price.approx_eq(price, tolerance))
    }

    /// Products with `min <= price <= max`
    pub fn filter_price_range(&self, min: Price, max: Price) -> Vec<&'a Product> {
        self.by_price_where(|p| min <= p.price && p.price <= max)
    }

    /// Products with `min <= quantity <= max`
    pub fn filter_quantity_range(&self, min: u32, max: u32) -> Vec<&'a Product> {
        self.by_price_where(|p| min <= p.quantity && p.quantity <= max)
    }

    /// Products with fewer than `threshold` units
    pub fn filter_low_stock(&self, threshold: u32) -> Vec<&'a Product> {
        self.by_price_where(|p| p.is_low_stock(threshold))
    }

    /// Products whose name ends with `suffix` (case-sensitive)
    pub fn search_by_suffix(&self, suffix: &str) -> Vec<&'a Product> {
        self.store
            .all()
            .filter(|p| p.matches_suffix(suffix))
            .collect()
    }

    /// Products whose name equals `name` ignoring case
    pub fn search_by_name_ignore_case(&self, name: &str) -> Vec<&'a Product> {
        self.store
            .all()
            .filter(|p| p.matches_name_ignore_case(name))
            .collect()
    }

    fn by_price_where(&self, pred: impl Fn(&Product) -> bool) -> Vec<&'a Product> {
        self.store
            .ascending_by_price()
            .filter(|p| pred(*p))
            .collect()
    }
}
