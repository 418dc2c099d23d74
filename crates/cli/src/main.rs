//! Stockroom — menu-driven inventory shell.
//!
//! Two modes:
//! - **Interactive mode**: numbered menu with a rustyline prompt (if stdin is a TTY)
//! - **Pipe mode**: `stockroom < script.txt`, one answer per line from stdin
//!
//! The product file is loaded at startup and saved when the shell exits.
//! Settings come from an optional `stockroom.toml` in the working directory.

mod format;
mod input;
mod menu;
mod shell;

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process;

use stockroom_executor::{Executor, Inventory, LoadReport, StockroomConfig};

use format::{format_error, OutputMode};
use input::{Piped, Terminal};
use shell::Shell;

fn main() {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("(error) cannot determine working directory: {}", e);
            process::exit(1);
        }
    };

    let config = match StockroomConfig::load_or_default(&cwd) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("(error) {}", e);
            eprintln!("Using default configuration.");
            StockroomConfig::default()
        }
    };

    init_tracing(&config);
    let mode = OutputMode::from_config(&config.shell.output);

    let executor = match open_inventory(&config, &cwd, mode) {
        Ok(executor) => executor,
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(1);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let exit_code = if io::stdin().is_terminal() {
        match Terminal::new() {
            Ok(terminal) => Shell::new(executor, terminal, stdout, stderr, mode)
                .with_menu(true)
                .run(),
            Err(e) => {
                eprintln!("(error) cannot start line editor: {}", e);
                Shell::new(executor, Piped::new(io::stdin().lock()), stdout, stderr, mode).run()
            }
        }
    } else {
        Shell::new(executor, Piped::new(io::stdin().lock()), stdout, stderr, mode).run()
    };
    process::exit(exit_code);
}

fn init_tracing(config: &StockroomConfig) {
    let level = config.shell.log_level().unwrap_or(tracing::Level::WARN);
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_target(false)
        .with_max_level(level)
        .with_writer(io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("(error) cannot install logger: {}", e);
    }
}

/// Build the inventory and load its product file.
///
/// A failed load is reported and the shell starts with whatever the store
/// holds, which is nothing for an I/O failure or an aborted load. The
/// product file is then kept as a backup when the shell exits.
fn open_inventory(
    config: &StockroomConfig,
    cwd: &Path,
    mode: OutputMode,
) -> stockroom_executor::Result<Executor> {
    let mut inventory = Inventory::new(config, cwd)?;
    match inventory.load() {
        Ok(report) => print_load_report(&report, inventory.data_path(), mode),
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            eprintln!("Starting with an empty inventory.");
        }
    }
    if inventory.keeps_source() {
        eprintln!(
            "(warning) {} will be kept as {} on exit",
            inventory.data_path().display(),
            inventory.backup_path().display()
        );
    }
    Ok(Executor::new(inventory))
}

fn print_load_report(report: &LoadReport, path: &Path, mode: OutputMode) {
    for dup in &report.duplicates {
        eprintln!("(warning) skipped duplicate product ID {}", dup);
    }
    for bad in &report.malformed {
        eprintln!("(warning) skipped line {}: {}", bad.line, bad.reason);
    }
    if mode == OutputMode::Human {
        println!("Loaded {} products from {}.", report.loaded, path.display());
    }
}
