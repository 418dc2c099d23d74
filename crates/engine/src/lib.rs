//! Inventory engine for Stockroom
//!
//! This crate orchestrates the in-memory side:
//! - ProductStore: canonical product map with name, insertion and price views
//! - PriceIndex: live price ordering over the canonical map
//! - QueryEngine: read-only sort/filter/search projections
//! - Inventory: store bound to its product file (load at startup, save at exit)
//! - StockroomConfig: optional `stockroom.toml`
//!
//! The engine is the only component that knows how derived views are kept
//! consistent with the canonical map.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod inventory;
pub mod price_index;
pub mod query;
pub mod store;

pub use config::{ShellConfig, StockroomConfig, CONFIG_FILE_NAME, DEFAULT_DATA_FILE};
pub use inventory::Inventory;
pub use price_index::PriceIndex;
pub use query::QueryEngine;
pub use store::{LoadPolicy, LoadReport, MalformedLine, ProductStore};
