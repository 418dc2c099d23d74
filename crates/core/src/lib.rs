//! Core types for Stockroom
//!
//! This crate defines the foundational types used throughout the system:
//! - ProductId: Unique, immutable product identifier
//! - Product: The product record and its comma-separated line codec
//! - Price: Validated, totally ordered unit price
//! - PriceOrder: Direction of price-ordered traversals
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod price;
pub mod record;

pub use error::{Error, Result};
pub use price::{Price, PriceOrder};
pub use record::{is_encodable_text, Product, ProductId, FIELD_COUNT, FIELD_SEPARATOR};
