//! Product record and its line codec
//!
//! A `Product` is encoded as one comma-joined line:
//!
//! ```text
//! id,name,quantity,price,supplier
//! ```
//!
//! There is no quoting. A name or supplier containing `,` or a line break
//! cannot be represented; `decode` reports such lines as malformed instead
//! of guessing where the fields split. Use [`Product::is_encodable`] to
//! check text before it reaches the store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::price::Price;

/// Number of fields in an encoded product line
pub const FIELD_COUNT: usize = 5;

/// Field separator of the line format
pub const FIELD_SEPARATOR: char = ',';

/// Unique, immutable product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a raw identifier
    pub const fn new(id: i64) -> Self {
        ProductId(id)
    }

    /// The raw identifier
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse()
            .map(ProductId)
            .map_err(|_| Error::InvalidInput(format!("invalid product id '{}'", s.trim())))
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        ProductId(id)
    }
}

/// A product record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Identity, unique within a store
    pub id: ProductId,
    /// Display name
    pub name: String,
    /// Units in stock
    pub quantity: u32,
    /// Unit price
    pub price: Price,
    /// Supplier name
    pub supplier: String,
}

impl Product {
    /// Create a product
    pub fn new(
        id: i64,
        name: impl Into<String>,
        quantity: u32,
        price: Price,
        supplier: impl Into<String>,
    ) -> Self {
        Product {
            id: ProductId(id),
            name: name.into(),
            quantity,
            price,
            supplier: supplier.into(),
        }
    }

    /// Encode as a single line, without a trailing newline.
    pub fn encode(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.id,
            self.name,
            self.quantity,
            self.price,
            self.supplier,
            sep = FIELD_SEPARATOR
        )
    }

    /// Decode a line produced by [`Product::encode`].
    ///
    /// Fails with `MalformedRecord` when the line does not have exactly five
    /// fields or a numeric field does not parse.
    pub fn decode(line: &str) -> Result<Self> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(Error::malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let id = fields[0]
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::malformed(format!("invalid id '{}'", fields[0])))?;
        let quantity = fields[2]
            .trim()
            .parse::<u32>()
            .map_err(|_| Error::malformed(format!("invalid quantity '{}'", fields[2])))?;
        let price = fields[3]
            .parse::<Price>()
            .map_err(|e| Error::malformed(e.to_string()))?;

        Ok(Product {
            id: ProductId(id),
            name: fields[1].to_string(),
            quantity,
            price,
            supplier: fields[4].to_string(),
        })
    }

    /// Whether the text fields survive an encode/decode round trip.
    pub fn is_encodable(&self) -> bool {
        is_encodable_text(&self.name) && is_encodable_text(&self.supplier)
    }

    /// True iff the name ends with `suffix` (case-sensitive).
    pub fn matches_suffix(&self, suffix: &str) -> bool {
        self.name.ends_with(suffix)
    }

    /// True iff the name equals `name` ignoring case.
    ///
    /// Whole-string equality under Unicode lowercasing, not a substring match.
    pub fn matches_name_ignore_case(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// True iff fewer than `threshold` units are in stock.
    pub fn is_low_stock(&self, threshold: u32) -> bool {
        self.quantity < threshold
    }
}

/// Whether `text` can appear in a name or supplier field.
pub fn is_encodable_text(text: &str) -> bool {
    !text.contains([FIELD_SEPARATOR, '\n', '\r'])
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>10}{}", "ID: ", self.id)?;
        writeln!(f, "{:>10}{}", "Name: ", self.name)?;
        writeln!(f, "{:>10}{}", "Quantity: ", self.quantity)?;
        writeln!(f, "{:>10}{:.2}", "Price: $", self.price.as_f64())?;
        write!(f, "{:>10}{}", "Supplier: ", self.supplier)
    }
}
