//! Inventories built from `stockroom.toml`.

use crate::common::*;
use stockroom::{Command, Error, Executor, Inventory, LoadPolicy, StockroomConfig};
use tempfile::TempDir;

#[test]
fn data_file_is_resolved_against_the_working_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("stockroom.toml"),
        "data_file = \"stock.csv\"\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("stock.csv"), "1,Widget,10,2.5,Acme\n").unwrap();

    let config = StockroomConfig::load_or_default(dir.path()).unwrap();
    let mut inventory = Inventory::new(&config, dir.path()).unwrap();
    assert_eq!(inventory.load().unwrap().loaded, 1);
    assert_eq!(inventory.data_path(), dir.path().join("stock.csv"));
}

#[test]
fn abort_policy_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("stockroom.toml"), "load_policy = \"abort\"\n").unwrap();
    std::fs::write(dir.path().join("products.txt"), "garbage\n").unwrap();

    let config = StockroomConfig::load_or_default(dir.path()).unwrap();
    assert_eq!(config.load_policy().unwrap(), LoadPolicy::Abort);

    let mut inventory = Inventory::new(&config, dir.path()).unwrap();
    assert!(matches!(
        inventory.load(),
        Err(Error::MalformedRecord { line: Some(1), .. })
    ));
}

#[test]
fn price_tolerance_from_config() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("stockroom.toml"), "price_tolerance = 0.001\n").unwrap();
    std::fs::write(dir.path().join("products.txt"), "1,Widget,10,2.5,Acme\n").unwrap();

    let config = StockroomConfig::load_or_default(dir.path()).unwrap();
    let mut inventory = Inventory::new(&config, dir.path()).unwrap();
    inventory.load().unwrap();
    let executor = Executor::new(inventory);

    let out = executor
        .execute(Command::FilterExactPrice {
            price: price(2.5004),
        })
        .unwrap();
    assert_eq!(names(&out), vec!["Widget"]);
}

#[test]
fn config_file_is_never_written() {
    let dir = TempDir::new().unwrap();
    let config = StockroomConfig::load_or_default(dir.path()).unwrap();
    let inventory = Inventory::new(&config, dir.path()).unwrap();
    Executor::new(inventory).shutdown().unwrap();

    assert!(!dir.path().join("stockroom.toml").exists());
    assert!(dir.path().join("products.txt").exists());
}
