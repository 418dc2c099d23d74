//! Command enum defining every inventory operation.
//!
//! Commands are the instruction set of the shell. Each menu action maps to
//! exactly one variant, and every variant carries all of its arguments.
//!
//! Commands are:
//! - **Self-contained**: all parameters needed for execution are in the variant
//! - **Serializable**: can be converted to/from JSON

use serde::{Deserialize, Serialize};
use stockroom_core::{Price, Product, ProductId};

/// A self-contained, serializable inventory operation.
///
/// # Command Categories
///
/// | Category | Variants | Lock |
/// |----------|----------|------|
/// | Mutation | `AddProduct`, `UpdateQuantity`, `UpdatePrice` | write |
/// | Lookup | `GetProduct`, `ListAll` | read |
/// | Ordering | `SortByName`, `PriceAscending`, `PriceDescending` | read |
/// | Filter | `FilterExactPrice`, `FilterPriceRange`, `FilterQuantityRange`, `FilterLowStock` | read |
/// | Search | `SearchBySuffix`, `SearchByName` | read |
///
/// # Example
///
/// ```ignore
/// use stockroom_executor::{Command, Price};
///
/// let cmd = Command::FilterPriceRange {
///     min: Price::new(1.0)?,
///     max: Price::new(5.0)?,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Mutation ====================
    /// Add a new product.
    /// Returns: `Output::Added`
    AddProduct {
        /// The product to insert
        product: Product,
    },

    /// Set the stock level of a product.
    /// Returns: `Output::Updated`
    UpdateQuantity {
        /// Product to update
        id: ProductId,
        /// New stock level
        quantity: u32,
    },

    /// Set the unit price of a product.
    /// Returns: `Output::Updated`
    UpdatePrice {
        /// Product to update
        id: ProductId,
        /// New unit price
        price: Price,
    },

    // ==================== Lookup ====================
    /// Look up one product by id.
    /// Returns: `Output::Product`
    GetProduct {
        /// Product to look up
        id: ProductId,
    },

    /// Every product in insertion order.
    /// Returns: `Output::Products`
    ListAll,

    // ==================== Ordering ====================
    /// Every product sorted by name.
    /// Returns: `Output::Products`
    SortByName,

    /// Every product, cheapest first.
    /// Returns: `Output::Products`
    PriceAscending,

    /// Every product, most expensive first.
    /// Returns: `Output::Products`
    PriceDescending,

    // ==================== Filter ====================
    /// Products at exactly `price` (within the configured tolerance).
    /// Returns: `Output::Products`
    FilterExactPrice {
        /// Price to match
        price: Price,
    },

    /// Products with `min <= price <= max`.
    /// Returns: `Output::Products`
    FilterPriceRange {
        /// Lower bound, inclusive
        min: Price,
        /// Upper bound, inclusive
        max: Price,
    },

    /// Products with `min <= quantity <= max`.
    /// Returns: `Output::Products`
    FilterQuantityRange {
        /// Lower bound, inclusive
        min: u32,
        /// Upper bound, inclusive
        max: u32,
    },

    /// Products with fewer than `threshold` units.
    /// Returns: `Output::Products`
    FilterLowStock {
        /// Exclusive stock threshold
        threshold: u32,
    },

    // ==================== Search ====================
    /// Products whose name ends with `suffix`.
    /// Returns: `Output::Products`
    SearchBySuffix {
        /// Case-sensitive suffix
        suffix: String,
    },

    /// Products whose name equals `name`, ignoring case.
    /// Returns: `Output::Products`
    SearchByName {
        /// Name to compare against
        name: String,
    },
}

impl Command {
    /// Short command name used in log events.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AddProduct { .. } => "add",
            Command::UpdateQuantity { .. } => "update-quantity",
            Command::UpdatePrice { .. } => "update-price",
            Command::GetProduct { .. } => "search-by-id",
            Command::ListAll => "list-all",
            Command::SortByName => "sort-by-name",
            Command::PriceAscending => "price-ascending",
            Command::PriceDescending => "price-descending",
            Command::FilterExactPrice { .. } => "filter-exact-price",
            Command::FilterPriceRange { .. } => "filter-price-range",
            Command::FilterQuantityRange { .. } => "filter-quantity-range",
            Command::FilterLowStock { .. } => "filter-low-stock",
            Command::SearchBySuffix { .. } => "search-by-suffix",
            Command::SearchByName { .. } => "search-by-name",
        }
    }
}
