//! The Executor - single entry point to the inventory.
//!
//! The Executor routes commands to store and query operations and converts
//! results to outputs. It owns the inventory behind one lock.

use std::path::PathBuf;

use parking_lot::RwLock;
use stockroom_core::{Error, Product, Result};
use stockroom_engine::Inventory;
use tracing::debug;

use crate::{Command, Output};

/// The command executor - single entry point to the inventory.
///
/// # Thread Safety
///
/// Every command takes the one inventory lock: a write lock for
/// `AddProduct` and the updates, a read lock for everything else. A
/// mutation is therefore visible in every view at once or not at all.
///
/// # Example
///
/// ```ignore
/// use stockroom_executor::{Command, Executor, Inventory};
///
/// let executor = Executor::new(Inventory::at_path("products.txt"));
/// let output = executor.execute(Command::ListAll)?;
/// let saved = executor.shutdown()?;
/// ```
pub struct Executor {
    inventory: RwLock<Inventory>,
}

impl Executor {
    /// Create a new executor owning `inventory`.
    pub fn new(inventory: Inventory) -> Self {
        Self {
            inventory: RwLock::new(inventory),
        }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. A failed command leaves the
    /// inventory unchanged.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        debug!(target: "stockroom::executor", command = cmd.name(), "Executing");

        match cmd {
            Command::AddProduct { product } => {
                check_encodable(&product)?;
                let id = product.id;
                self.inventory.write().store_mut().insert(product)?;
                Ok(Output::Added(id))
            }
            Command::UpdateQuantity { id, quantity } => {
                let mut inv = self.inventory.write();
                let product = inv.store_mut().update_quantity(id, quantity)?;
                Ok(Output::Updated(product.clone()))
            }
            Command::UpdatePrice { id, price } => {
                let mut inv = self.inventory.write();
                let product = inv.store_mut().update_price(id, price)?;
                Ok(Output::Updated(product.clone()))
            }

            Command::GetProduct { id } => {
                let inv = self.inventory.read();
                inv.store()
                    .get(id)
                    .cloned()
                    .map(Output::Product)
                    .ok_or(Error::NotFound { id })
            }
            Command::ListAll => {
                let inv = self.inventory.read();
                Ok(owned(inv.store().all()))
            }

            Command::SortByName => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().sorted_by_name()))
            }
            Command::PriceAscending => {
                let inv = self.inventory.read();
                Ok(owned(inv.store().ascending_by_price()))
            }
            Command::PriceDescending => {
                let inv = self.inventory.read();
                Ok(owned(inv.store().descending_by_price()))
            }

            Command::FilterExactPrice { price } => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().filter_exact_price(price)))
            }
            Command::FilterPriceRange { min, max } => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().filter_price_range(min, max)))
            }
            Command::FilterQuantityRange { min, max } => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().filter_quantity_range(min, max)))
            }
            Command::FilterLowStock { threshold } => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().filter_low_stock(threshold)))
            }

            Command::SearchBySuffix { suffix } => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().search_by_suffix(&suffix)))
            }
            Command::SearchByName { name } => {
                let inv = self.inventory.read();
                Ok(owned(inv.query().search_by_name_ignore_case(&name)))
            }
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Number of products currently held
    pub fn len(&self) -> usize {
        self.inventory.read().store().len()
    }

    /// Whether the inventory holds no products
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Path of the product file written by `shutdown`
    pub fn data_path(&self) -> PathBuf {
        self.inventory.read().data_path().to_path_buf()
    }

    /// Drain the inventory and save it to its product file.
    ///
    /// Returns the number of products written.
    pub fn shutdown(self) -> Result<usize> {
        self.inventory.into_inner().close()
    }
}

fn check_encodable(product: &Product) -> Result<()> {
    if product.is_encodable() {
        Ok(())
    } else {
        Err(Error::InvalidInput(
            "name and supplier must not contain commas or line breaks".to_string(),
        ))
    }
}

fn owned<'a>(products: impl IntoIterator<Item = &'a Product>) -> Output {
    Output::Products(products.into_iter().cloned().collect())
}
