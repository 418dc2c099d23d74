//! Unit price of a product
//!
//! `Price` wraps the user-supplied `f64` exactly as entered. Construction
//! rejects NaN, infinities and negative values, which makes the total order
//! from `f64::total_cmp` agree with numeric order on every value that can
//! exist. That lets prices key ordered collections directly.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Non-negative, finite unit price
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    /// Zero price
    pub const ZERO: Price = Price(0.0);

    /// Create a price, rejecting negative and non-finite values.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidInput(format!(
                "price must be a finite number, got {}",
                value
            )));
        }
        if value < 0.0 {
            return Err(Error::InvalidInput(format!(
                "price must not be negative, got {}",
                value
            )));
        }
        // -0.0 and 0.0 must compare equal under total_cmp
        Ok(Price(if value == 0.0 { 0.0 } else { value }))
    }

    /// The stored value
    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Whether `other` lies within `tolerance` of this price.
    ///
    /// A tolerance of `0.0` is exact equality at stored precision.
    pub fn approx_eq(self, other: Price, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Price {}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Price {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for Price {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Price::new(value)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> f64 {
        price.0
    }
}

/// Shortest representation that parses back to the same `f64`
/// (`2.5`, `9.99`, `5`). This is the persisted rendering.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Price {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| Error::InvalidInput(format!("invalid price '{}'", s.trim())))?;
        Price::new(value)
    }
}

/// Direction of a price-ordered traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceOrder {
    /// Cheapest first
    Ascending,
    /// Most expensive first
    Descending,
}
