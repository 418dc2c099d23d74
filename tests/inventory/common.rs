//! Shared helpers for the inventory suite.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use stockroom::{Command, Executor, Inventory, Output, Price, Product};
use tempfile::TempDir;

/// Executor over a product file inside its own temp dir.
pub struct TestInventory {
    pub dir: TempDir,
    pub executor: Executor,
}

impl TestInventory {
    /// Empty inventory, nothing on disk yet.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let inventory = Inventory::at_path(dir.path().join("products.txt"));
        TestInventory {
            dir,
            executor: Executor::new(inventory),
        }
    }

    /// Inventory loaded from `content` written as the product file.
    pub fn with_file(content: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("products.txt");
        std::fs::write(&path, content).unwrap();
        let mut inventory = Inventory::at_path(&path);
        inventory.load().unwrap();
        TestInventory {
            dir,
            executor: Executor::new(inventory),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("products.txt")
    }

    pub fn add(&self, product: Product) {
        self.executor
            .execute(Command::AddProduct { product })
            .unwrap();
    }

    /// Names from a product-list command, in output order.
    pub fn names(&self, cmd: Command) -> Vec<String> {
        names(&self.executor.execute(cmd).unwrap())
    }
}

pub fn names(output: &Output) -> Vec<String> {
    output.products().iter().map(|p| p.name.clone()).collect()
}

pub fn price(v: f64) -> Price {
    Price::new(v).unwrap()
}

pub fn product(id: i64, name: &str, quantity: u32, p: f64, supplier: &str) -> Product {
    Product::new(id, name, quantity, price(p), supplier)
}

/// Sorted lines of a product file.
pub fn sorted_lines(path: &Path) -> Vec<String> {
    let mut lines: Vec<String> = std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect();
    lines.sort();
    lines
}
