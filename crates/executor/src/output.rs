//! Output enum for command execution results.
//!
//! Every command produces exactly one output variant. The mapping is fixed
//! per command; only the values depend on inventory state.

use serde::{Deserialize, Serialize};
use stockroom_core::{Product, ProductId};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output`
/// variant, documented on the command.
///
/// # Example
///
/// ```text
/// match executor.execute(Command::GetProduct { id })? {
///     Output::Product(p) => println!("{}", p),
///     _ => unreachable!("GetProduct always returns Product"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// Id of a newly added product
    Added(ProductId),

    /// A single product
    Product(Product),

    /// Zero or more products, in the order the command defines
    Products(Vec<Product>),

    /// A product after an update
    Updated(Product),
}

impl Output {
    /// Products carried by this output, in order.
    pub fn products(&self) -> &[Product] {
        match self {
            Output::Added(_) => &[],
            Output::Product(p) | Output::Updated(p) => std::slice::from_ref(p),
            Output::Products(ps) => ps,
        }
    }
}
