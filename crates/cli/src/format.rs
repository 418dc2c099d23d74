//! Output → human/json string formatting.
//!
//! Two modes:
//! - **Human** (default): a heading line, then one block per product
//! - **JSON** (`output = "json"`): `serde_json::to_string_pretty`

use stockroom_executor::{Command, Error, Output};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Human,
    Json,
}

impl OutputMode {
    /// Mode named by the `[shell] output` config value.
    ///
    /// The value is validated when the config loads; anything other than
    /// `"json"` means human output.
    pub fn from_config(output: &str) -> Self {
        if output == "json" {
            OutputMode::Json
        } else {
            OutputMode::Human
        }
    }
}

/// Heading printed above the result of `cmd` in human mode.
pub fn heading(cmd: &Command) -> String {
    match cmd {
        Command::AddProduct { .. } => "Product added.".to_string(),
        Command::GetProduct { .. } => "Product found:".to_string(),
        Command::UpdateQuantity { .. } => "Quantity updated:".to_string(),
        Command::UpdatePrice { .. } => "Price updated:".to_string(),
        Command::ListAll => "All products:".to_string(),
        Command::SortByName => "Products sorted by name:".to_string(),
        Command::PriceAscending => "Products sorted by price (low to high):".to_string(),
        Command::PriceDescending => "Products sorted by price (high to low):".to_string(),
        Command::FilterExactPrice { price } => {
            format!("Products priced at ${:.2}:", price.as_f64())
        }
        Command::FilterPriceRange { min, max } => format!(
            "Products priced from ${:.2} to ${:.2}:",
            min.as_f64(),
            max.as_f64()
        ),
        Command::FilterQuantityRange { min, max } => {
            format!("Products with quantity from {} to {}:", min, max)
        }
        Command::FilterLowStock { threshold } => {
            format!("Products with fewer than {} in stock:", threshold)
        }
        Command::SearchBySuffix { suffix } => {
            format!("Products whose name ends with \"{}\":", suffix)
        }
        Command::SearchByName { name } => {
            format!("Products named \"{}\" (ignoring case):", name)
        }
    }
}

/// Format a successful output.
pub fn format_output(output: &Output, heading: &str, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => format_json(output),
        OutputMode::Human => format_human(output, heading),
    }
}

/// Format an error.
pub fn format_error(err: &Error, mode: OutputMode) -> String {
    match mode {
        OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
            "error": format!("{}", err)
        }))
        .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
        OutputMode::Human => format!("(error) {}", err),
    }
}

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output)
        .unwrap_or_else(|e| format!("{{\"error\": \"serialization failed: {}\"}}", e))
}

fn format_human(output: &Output, heading: &str) -> String {
    match output {
        Output::Added(id) => format!("Product {} added.", id),
        Output::Product(p) | Output::Updated(p) => format!("{}\n{}", heading, p),
        Output::Products(ps) if ps.is_empty() => format!("{}\n(no products)", heading),
        Output::Products(ps) => {
            let blocks: Vec<String> = ps.iter().map(|p| p.to_string()).collect();
            format!("{}\n{}", heading, blocks.join("\n\n"))
        }
    }
}
