//! Durability layer for Stockroom
//!
//! This crate handles everything that touches disk:
//!
//! - FlatFile: line-oriented product file, one encoded product per line
//! - Crash-safe truncate-and-overwrite saves (write, fsync, rename)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod flat_file;

pub use flat_file::FlatFile;
