//! Inventory: the store bound to its product file
//!
//! ## Lifecycle
//!
//! 1. `Inventory::new` validates the config and creates an empty store
//! 2. `load` reads the product file once at startup
//! 3. commands run against `store()` / `store_mut()` / `query()`
//! 4. `close` drains the store and rewrites the product file
//!
//! A failed `load` leaves the inventory usable: `Io` failures happen before
//! anything is inserted, and the abort policy decodes everything before it
//! inserts.
//!
//! A product file that did not load cleanly (the load failed, or lines were
//! skipped as malformed) is never overwritten. `close` first renames it to
//! its backup path, then writes the store.

use std::path::{Path, PathBuf};

use stockroom_core::Result;
use stockroom_durability::FlatFile;
use tracing::{info, warn};

use crate::config::StockroomConfig;
use crate::query::QueryEngine;
use crate::store::{LoadPolicy, LoadReport, ProductStore};

/// Product store plus the file it is persisted to
#[derive(Debug)]
pub struct Inventory {
    store: ProductStore,
    file: FlatFile,
    load_policy: LoadPolicy,
    price_tolerance: f64,
    /// Set when the product file holds lines the store does not
    keep_source: bool,
}

impl Inventory {
    /// Create an empty inventory for `config`, resolving the data file
    /// against `dir`.
    pub fn new(config: &StockroomConfig, dir: &Path) -> Result<Self> {
        config.validate()?;
        Ok(Inventory {
            store: ProductStore::new(),
            file: FlatFile::new(config.data_path(dir)),
            load_policy: config.load_policy()?,
            price_tolerance: config.price_tolerance,
            keep_source: false,
        })
    }

    /// Create an empty inventory persisted at `path` with default settings.
    pub fn at_path(path: impl AsRef<Path>) -> Self {
        Inventory {
            store: ProductStore::new(),
            file: FlatFile::new(path),
            load_policy: LoadPolicy::default(),
            price_tolerance: 0.0,
            keep_source: false,
        }
    }

    /// Override the malformed-line policy
    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Path of the product file
    pub fn data_path(&self) -> &Path {
        self.file.path()
    }

    /// Where `close` keeps a product file that did not load cleanly
    pub fn backup_path(&self) -> PathBuf {
        self.file.backup_path()
    }

    /// Whether `close` will back up the product file before writing
    pub fn keeps_source(&self) -> bool {
        self.keep_source
    }

    /// Load the product file into the store.
    ///
    /// On error, or when malformed lines were skipped, the file is marked
    /// to be backed up at close.
    pub fn load(&mut self) -> Result<LoadReport> {
        let report = match self.read_into_store() {
            Ok(report) => report,
            Err(e) => {
                self.keep_source = true;
                return Err(e);
            }
        };
        if !report.malformed.is_empty() {
            self.keep_source = true;
        }
        info!(
            target: "stockroom::inventory",
            path = %self.file.path().display(),
            loaded = report.loaded,
            "Inventory loaded"
        );
        Ok(report)
    }

    fn read_into_store(&mut self) -> Result<LoadReport> {
        let lines = self.file.read_lines()?;
        self.store.load_all(lines, self.load_policy)
    }

    /// The product store
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// The product store, mutable
    pub fn store_mut(&mut self) -> &mut ProductStore {
        &mut self.store
    }

    /// Query engine using the configured price tolerance
    pub fn query(&self) -> QueryEngine<'_> {
        QueryEngine::new(&self.store).with_price_tolerance(self.price_tolerance)
    }

    /// Drain the store and rewrite the product file.
    ///
    /// A file that did not load cleanly is renamed to its backup path first;
    /// if that fails nothing is written. Returns the number of products
    /// written.
    pub fn close(mut self) -> Result<usize> {
        if self.keep_source {
            match self.file.back_up() {
                Ok(Some(backup)) => warn!(
                    target: "stockroom::inventory",
                    backup = %backup.display(),
                    "Product file did not load cleanly, kept as backup"
                ),
                Ok(None) => {}
                Err(e) => {
                    warn!(
                        target: "stockroom::inventory",
                        path = %self.file.path().display(),
                        error = %e,
                        "Failed to back up product file, not saving"
                    );
                    return Err(e);
                }
            }
        }

        let drained = self.store.drain_all();
        let result = self.file.write_lines(drained.iter().map(|(_, line)| line));
        if let Err(e) = &result {
            warn!(
                target: "stockroom::inventory",
                path = %self.file.path().display(),
                products = drained.len(),
                error = %e,
                "Failed to save inventory"
            );
        }
        result
    }
}
