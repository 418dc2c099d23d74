//! # Stockroom Executor
//!
//! The command layer of the Stockroom inventory.
//!
//! This is the only crate a front end needs to import. It provides:
//! - [`Executor`] - owns the inventory and runs commands against it
//! - [`Command`]/[`Output`] - one variant per menu action and its result
//! - [`Product`], [`ProductId`], [`Price`] - the record types
//!
//! ## Quick Start
//!
//! ```text
//! use stockroom_executor::{Command, Executor, Inventory, Price, Product};
//!
//! let mut inventory = Inventory::at_path("products.txt");
//! inventory.load()?;
//!
//! let executor = Executor::new(inventory);
//! executor.execute(Command::AddProduct {
//!     product: Product::new(1, "Widget", 10, Price::new(2.5)?, "Acme"),
//! })?;
//! let cheapest_first = executor.execute(Command::PriceAscending)?;
//!
//! executor.shutdown()?; // saves products.txt
//! ```

#![warn(missing_docs)]

mod command;
mod executor;
mod output;

// Test modules
#[cfg(test)]
mod tests;

pub use command::Command;
pub use executor::Executor;
pub use output::Output;

// Re-export record and error types so front ends don't need stockroom-core
pub use stockroom_core::{Error, Price, Product, ProductId, Result};

// Re-export inventory and configuration types so front ends don't need stockroom-engine
pub use stockroom_engine::{Inventory, LoadPolicy, LoadReport, MalformedLine, StockroomConfig};
