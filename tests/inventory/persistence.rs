//! Load at startup, save at shutdown.

use std::collections::BTreeSet;

use crate::common::*;
use stockroom::{Command, Error, Executor, Inventory, LoadPolicy, ProductId};

#[test]
fn save_then_load_is_idempotent() {
    let inv = TestInventory::new();
    inv.add(product(1, "Widget", 10, 2.5, "Acme"));
    inv.add(product(2, "Gadget", 3, 9.99, "Acme"));
    inv.add(product(-4, "Sprocket", 0, 0.0, ""));
    inv.executor
        .execute(Command::UpdateQuantity {
            id: ProductId::new(1),
            quantity: 11,
        })
        .unwrap();

    let path = inv.path();
    let before: BTreeSet<String> = inv
        .executor
        .execute(Command::ListAll)
        .unwrap()
        .products()
        .iter()
        .map(|p| p.encode())
        .collect();
    assert_eq!(inv.executor.shutdown().unwrap(), 3);
    let first_save = sorted_lines(&path);

    let reloaded = TestInventory::with_file(&std::fs::read_to_string(&path).unwrap());
    let after: BTreeSet<String> = reloaded
        .executor
        .execute(Command::ListAll)
        .unwrap()
        .products()
        .iter()
        .map(|p| p.encode())
        .collect();
    assert_eq!(before, after);

    let path2 = reloaded.path();
    reloaded.executor.shutdown().unwrap();
    assert_eq!(sorted_lines(&path2), first_save);
}

#[test]
fn skip_policy_reports_and_continues() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    std::fs::write(
        &path,
        "1,Widget,10,2.5,Acme\n\
         2,Nuts, Bolts,5,1.0,Acme\n\
         \n\
         1,Again,1,1.0,Acme\n\
         3,Gizmo,x,4.0,Globex\n\
         4,Gadget,3,9.99,Acme\r\n",
    )
    .unwrap();

    let mut inventory = Inventory::at_path(&path);
    let report = inventory.load().unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.duplicates, vec![ProductId::new(1)]);
    let bad: Vec<usize> = report.malformed.iter().map(|m| m.line).collect();
    assert_eq!(bad, vec![2, 5]);
    assert!(!report.is_clean());
    assert_eq!(inventory.store().get(ProductId::new(4)).unwrap().supplier, "Acme");
}

#[test]
fn abort_policy_loads_nothing() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    std::fs::write(&path, "1,Widget,10,2.5,Acme\n2,Gadget,3,-9.99,Acme\n").unwrap();

    let mut inventory = Inventory::at_path(&path).with_load_policy(LoadPolicy::Abort);
    let err = inventory.load().unwrap_err();
    assert!(matches!(err, Error::MalformedRecord { line: Some(2), .. }));
    assert!(inventory.store().is_empty());
}

#[test]
fn missing_file_starts_empty_and_is_created_on_save() {
    let inv = TestInventory::new();
    let path = inv.path();
    assert!(!path.exists());
    assert!(inv.executor.is_empty());

    inv.add(product(1, "Widget", 10, 2.5, "Acme"));
    inv.executor.shutdown().unwrap();
    assert_eq!(sorted_lines(&path), vec!["1,Widget,10,2.5,Acme"]);
}

#[test]
fn save_truncates_previous_content() {
    let inv = TestInventory::with_file("9,Old,1,1,Acme\n");
    inv.executor
        .execute(Command::UpdatePrice {
            id: ProductId::new(9),
            price: price(2.25),
        })
        .unwrap();
    let path = inv.path();
    inv.executor.shutdown().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "9,Old,1,2.25,Acme\n");

    let leftovers: Vec<_> = std::fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(leftovers.len(), 1, "temp file left behind: {:?}", leftovers);
}

#[test]
fn shutdown_after_aborted_load_keeps_original_as_backup() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    let original = "1,Widget,10,2.5,Acme\n2,Gadget,x,9.99,Acme\n";
    std::fs::write(&path, original).unwrap();

    let mut inventory = Inventory::at_path(&path).with_load_policy(LoadPolicy::Abort);
    assert!(inventory.load().is_err());
    let backup = inventory.backup_path();

    let executor = Executor::new(inventory);
    assert_eq!(executor.shutdown().unwrap(), 0);
    assert_eq!(std::fs::read_to_string(&backup).unwrap(), original);
}

#[test]
fn latin1_line_is_skipped_and_kept_in_backup() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("products.txt");
    let original: &[u8] = b"1,Widget,10,2.5,Acme\n2,Caf\xe9,3,9.99,Acme\n3,Gadget,3,9.99,Acme\n";
    std::fs::write(&path, original).unwrap();

    let mut inventory = Inventory::at_path(&path);
    let report = inventory.load().unwrap();
    assert_eq!(report.loaded, 2);
    assert_eq!(report.malformed.len(), 1);
    let backup = inventory.backup_path();

    let executor = Executor::new(inventory);
    assert_eq!(executor.shutdown().unwrap(), 2);
    assert_eq!(std::fs::read(&backup).unwrap(), original);
    assert_eq!(
        sorted_lines(&path),
        vec!["1,Widget,10,2.5,Acme", "3,Gadget,3,9.99,Acme"]
    );
}
