//! Error types for the Stockroom inventory
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::record::ProductId;
use std::io;
use thiserror::Error;

/// Result type alias for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the inventory
///
/// Every variant is recoverable at the call site. The shell reports them
/// as messages and returns to the menu.
#[derive(Debug, Error)]
pub enum Error {
    /// Insert of an identifier that is already present
    #[error("Product with ID {id} already exists")]
    DuplicateId {
        /// The conflicting identifier
        id: ProductId,
    },

    /// A persisted line (or decoded text) that is not a valid record
    #[error("Malformed record{}: {reason}", line_suffix(.line))]
    MalformedRecord {
        /// 1-based line number, when decoding from a file
        line: Option<usize>,
        /// What was wrong with the line
        reason: String,
    },

    /// Lookup or update of an identifier with no match
    #[error("Product with ID {id} not found")]
    NotFound {
        /// The missing identifier
        id: ProductId,
    },

    /// I/O error (file open, read, write)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Rejected argument (negative price, non-finite number, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

fn line_suffix(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {}", n),
        None => String::new(),
    }
}

impl Error {
    /// Build a `MalformedRecord` without a line number.
    pub fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedRecord {
            line: None,
            reason: reason.into(),
        }
    }

    /// Attach a line number to a `MalformedRecord`; other variants pass through.
    pub fn at_line(self, n: usize) -> Self {
        match self {
            Error::MalformedRecord { reason, .. } => Error::MalformedRecord {
                line: Some(n),
                reason,
            },
            other => other,
        }
    }

    /// Whether this error means "no such product".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}
