//! Test modules for the executor crate.


use stockroom_core::{Price, Product};
use tempfile::TempDir;

use crate::{Executor, Inventory};

/// Executor over an empty inventory persisted inside a fresh temp dir.
pub(crate) fn create_test_executor() -> (TempDir, Executor) {
    let dir = TempDir::new().unwrap();
    let inventory = Inventory::at_path(dir.path().join("products.txt"));
    (dir, Executor::new(inventory))
}

pub(crate) fn product(id: i64, name: &str, quantity: u32, price: f64, supplier: &str) -> Product {
    Product::new(id, name, quantity, Price::new(price).unwrap(), supplier)
}
