//! The numbered menu and argument prompts.
//!
//! A menu choice is read first, then each of its arguments on its own line.
//! Every argument is validated as it is read, so a bad value is reported
//! before the remaining prompts are shown.

use std::fmt;
use std::str::FromStr;

use stockroom_core::is_encodable_text;
use stockroom_executor::{Command, Error, Price, Product, ProductId, Result};

use crate::input::LineSource;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    SearchById,
    ListAll,
    SortByName,
    PriceAscending,
    PriceDescending,
    UpdateQuantity,
    UpdatePrice,
    FilterExactPrice,
    FilterPriceRange,
    FilterQuantityRange,
    FilterLowStock,
    SearchBySuffix,
    SearchByName,
    Exit,
}

impl MenuChoice {
    /// Menu entries in display order; entry `n` is `ALL[n - 1]`.
    pub const ALL: [MenuChoice; 15] = [
        MenuChoice::Add,
        MenuChoice::SearchById,
        MenuChoice::ListAll,
        MenuChoice::SortByName,
        MenuChoice::PriceAscending,
        MenuChoice::PriceDescending,
        MenuChoice::UpdateQuantity,
        MenuChoice::UpdatePrice,
        MenuChoice::FilterExactPrice,
        MenuChoice::FilterPriceRange,
        MenuChoice::FilterQuantityRange,
        MenuChoice::FilterLowStock,
        MenuChoice::SearchBySuffix,
        MenuChoice::SearchByName,
        MenuChoice::Exit,
    ];

    /// Text shown next to the entry number.
    pub fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Add product",
            MenuChoice::SearchById => "Search product by ID",
            MenuChoice::ListAll => "List all products",
            MenuChoice::SortByName => "Sort products by name",
            MenuChoice::PriceAscending => "Products by price (low to high)",
            MenuChoice::PriceDescending => "Products by price (high to low)",
            MenuChoice::UpdateQuantity => "Update product quantity",
            MenuChoice::UpdatePrice => "Update product price",
            MenuChoice::FilterExactPrice => "Filter by exact price",
            MenuChoice::FilterPriceRange => "Filter by price range",
            MenuChoice::FilterQuantityRange => "Filter by quantity range",
            MenuChoice::FilterLowStock => "Filter low stock",
            MenuChoice::SearchBySuffix => "Search by name suffix",
            MenuChoice::SearchByName => "Search by name (ignore case)",
            MenuChoice::Exit => "Save and exit",
        }
    }

    /// The full menu text.
    pub fn menu() -> String {
        let mut text = String::from("\n===== Inventory Menu =====\n");
        for (i, choice) in Self::ALL.iter().enumerate() {
            text.push_str(&format!("{:>2}. {}\n", i + 1, choice.label()));
        }
        text
    }
}

impl FromStr for MenuChoice {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        s.parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "invalid choice '{}', enter a number from 1 to {}",
                    s,
                    Self::ALL.len()
                ))
            })
    }
}

/// Why argument entry stopped before a command was built
#[derive(Debug)]
pub enum PromptError {
    /// Input ended mid-entry
    EndOfInput,
    /// An argument failed validation
    Invalid(Error),
}

impl From<Error> for PromptError {
    fn from(e: Error) -> Self {
        PromptError::Invalid(e)
    }
}

impl fmt::Display for PromptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptError::EndOfInput => write!(f, "end of input"),
            PromptError::Invalid(e) => write!(f, "{}", e),
        }
    }
}

/// Prompt for the arguments of `choice` and build its command.
///
/// Returns `Ok(None)` for `Exit`, which has no command.
pub fn read_command<S: LineSource>(
    src: &mut S,
    choice: MenuChoice,
) -> std::result::Result<Option<Command>, PromptError> {
    let cmd = match choice {
        MenuChoice::Add => {
            let id = ask(src, "Enter product ID: ", parse_id)?;
            let name = ask(src, "Enter product name: ", parse_name)?;
            let quantity = ask(src, "Enter quantity: ", parse_quantity)?;
            let price = ask(src, "Enter price: ", parse_price)?;
            let supplier = ask(src, "Enter supplier: ", parse_supplier)?;
            Command::AddProduct {
                product: Product {
                    id,
                    name,
                    quantity,
                    price,
                    supplier,
                },
            }
        }
        MenuChoice::SearchById => Command::GetProduct {
            id: ask(src, "Enter product ID: ", parse_id)?,
        },
        MenuChoice::ListAll => Command::ListAll,
        MenuChoice::SortByName => Command::SortByName,
        MenuChoice::PriceAscending => Command::PriceAscending,
        MenuChoice::PriceDescending => Command::PriceDescending,
        MenuChoice::UpdateQuantity => Command::UpdateQuantity {
            id: ask(src, "Enter product ID: ", parse_id)?,
            quantity: ask(src, "Enter new quantity: ", parse_quantity)?,
        },
        MenuChoice::UpdatePrice => Command::UpdatePrice {
            id: ask(src, "Enter product ID: ", parse_id)?,
            price: ask(src, "Enter new price: ", parse_price)?,
        },
        MenuChoice::FilterExactPrice => Command::FilterExactPrice {
            price: ask(src, "Enter price: ", parse_price)?,
        },
        MenuChoice::FilterPriceRange => Command::FilterPriceRange {
            min: ask(src, "Enter minimum price: ", parse_price)?,
            max: ask(src, "Enter maximum price: ", parse_price)?,
        },
        MenuChoice::FilterQuantityRange => Command::FilterQuantityRange {
            min: ask(src, "Enter minimum quantity: ", parse_quantity)?,
            max: ask(src, "Enter maximum quantity: ", parse_quantity)?,
        },
        MenuChoice::FilterLowStock => Command::FilterLowStock {
            threshold: ask(src, "Enter low stock threshold: ", parse_quantity)?,
        },
        MenuChoice::SearchBySuffix => Command::SearchBySuffix {
            suffix: ask(src, "Enter name suffix: ", |s| Ok(s.to_string()))?,
        },
        MenuChoice::SearchByName => Command::SearchByName {
            name: ask(src, "Enter product name: ", |s| Ok(s.to_string()))?,
        },
        MenuChoice::Exit => return Ok(None),
    };
    Ok(Some(cmd))
}

fn ask<S: LineSource, T>(
    src: &mut S,
    prompt: &str,
    parse: impl FnOnce(&str) -> Result<T>,
) -> std::result::Result<T, PromptError> {
    let line = src.read_line(prompt).ok_or(PromptError::EndOfInput)?;
    Ok(parse(&line)?)
}

fn parse_id(s: &str) -> Result<ProductId> {
    s.parse()
}

fn parse_price(s: &str) -> Result<Price> {
    s.parse()
}

fn parse_quantity(s: &str) -> Result<u32> {
    let s = s.trim();
    s.parse().map_err(|_| {
        Error::InvalidInput(format!(
            "invalid quantity '{}', expected a whole number >= 0",
            s
        ))
    })
}

/// Text fields are kept verbatim, spaces included, as the product file
/// stores them.
fn parse_name(s: &str) -> Result<String> {
    if s.trim().is_empty() {
        return Err(Error::InvalidInput("name must not be empty".to_string()));
    }
    check_text("name", s)
}

fn parse_supplier(s: &str) -> Result<String> {
    check_text("supplier", s)
}

fn check_text(field: &str, text: &str) -> Result<String> {
    if is_encodable_text(text) {
        Ok(text.to_string())
    } else {
        Err(Error::InvalidInput(format!(
            "{} must not contain commas",
            field
        )))
    }
}
