//! Stockroom - a small inventory manager over a multi-index record store
//!
//! Products live in one canonical map keyed by id. Name, insertion-order and
//! price views are derived from it and stay consistent as products are added
//! and updated. The store is loaded from a flat text file at startup and
//! written back when the session ends.
//!
//! # Quick Start
//!
//! ```ignore
//! use stockroom::{Command, Executor, Inventory, Price, Product};
//!
//! let mut inventory = Inventory::at_path("products.txt");
//! inventory.load()?;
//!
//! let executor = Executor::new(inventory);
//! executor.execute(Command::AddProduct {
//!     product: Product::new(1, "Widget", 10, Price::new(2.5)?, "Acme"),
//! })?;
//! let low_stock = executor.execute(Command::FilterLowStock { threshold: 5 })?;
//!
//! executor.shutdown()?;
//! ```
//!
//! # Architecture
//!
//! All shell operations go through the [`Executor`], which provides a
//! command-based API. The store and query engine are re-exported for direct
//! library use.

// Re-export the public API from stockroom-executor
pub use stockroom_executor::*;

pub use stockroom_engine::{ProductStore, QueryEngine};
