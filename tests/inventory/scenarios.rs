//! Menu-level scenarios through the executor.

use crate::common::*;
use stockroom::{Command, Error, ProductId};

#[test]
fn widget_and_gadget() {
    let inv = TestInventory::new();
    inv.add(product(1, "Widget", 10, 2.50, "Acme"));
    inv.add(product(2, "Gadget", 3, 9.99, "Acme"));

    assert_eq!(
        inv.names(Command::FilterLowStock { threshold: 5 }),
        vec!["Gadget"]
    );
    assert_eq!(inv.names(Command::PriceAscending), vec!["Widget", "Gadget"]);
    // "Widget" also ends in "get"
    assert_eq!(
        inv.names(Command::SearchBySuffix {
            suffix: "get".into()
        }),
        vec!["Widget", "Gadget"]
    );
    assert_eq!(
        inv.names(Command::SearchBySuffix {
            suffix: "dget".into()
        }),
        vec!["Widget", "Gadget"]
    );
    assert_eq!(
        inv.names(Command::SearchBySuffix {
            suffix: "adget".into()
        }),
        vec!["Gadget"]
    );
}

#[test]
fn duplicate_id_keeps_first() {
    let inv = TestInventory::new();
    inv.add(product(1, "A", 1, 5.0, "S"));

    let err = inv
        .executor
        .execute(Command::AddProduct {
            product: product(1, "B", 2, 6.0, "S"),
        })
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId { id } if id == ProductId::new(1)));

    assert_eq!(
        inv.names(Command::GetProduct {
            id: ProductId::new(1)
        }),
        vec!["A"]
    );
    assert_eq!(inv.executor.len(), 1);
}

#[test]
fn update_on_missing_id_creates_nothing() {
    let inv = TestInventory::new();
    inv.add(product(1, "Widget", 10, 2.5, "Acme"));

    let err = inv
        .executor
        .execute(Command::UpdateQuantity {
            id: ProductId::new(2),
            quantity: 50,
        })
        .unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(inv.executor.len(), 1);
    assert!(inv
        .executor
        .execute(Command::GetProduct {
            id: ProductId::new(2)
        })
        .unwrap_err()
        .is_not_found());
}

#[test]
fn price_update_reorders_both_directions() {
    let inv = TestInventory::new();
    inv.add(product(1, "Widget", 10, 2.5, "Acme"));
    inv.add(product(2, "Gadget", 3, 9.99, "Acme"));
    inv.add(product(3, "Gizmo", 7, 4.0, "Globex"));

    inv.executor
        .execute(Command::UpdatePrice {
            id: ProductId::new(2),
            price: price(1.0),
        })
        .unwrap();
    inv.executor
        .execute(Command::UpdatePrice {
            id: ProductId::new(1),
            price: price(20.0),
        })
        .unwrap();

    assert_eq!(
        inv.names(Command::PriceAscending),
        vec!["Gadget", "Gizmo", "Widget"]
    );
    assert_eq!(
        inv.names(Command::PriceDescending),
        vec!["Widget", "Gizmo", "Gadget"]
    );
    assert_eq!(
        inv.names(Command::FilterPriceRange {
            min: price(0.0),
            max: price(5.0),
        }),
        vec!["Gadget", "Gizmo"]
    );
}

#[test]
fn same_name_products_are_all_kept() {
    let inv = TestInventory::new();
    inv.add(product(1, "Bolt", 10, 0.2, "Acme"));
    inv.add(product(2, "Anchor", 1, 30.0, "Acme"));
    inv.add(product(3, "Bolt", 5, 0.1, "Globex"));

    let out = inv.executor.execute(Command::SortByName).unwrap();
    let ids: Vec<i64> = out.products().iter().map(|p| p.id.as_i64()).collect();
    assert_eq!(ids, vec![2, 1, 3]);

    assert_eq!(
        inv.names(Command::SearchByName {
            name: "BOLT".into()
        }),
        vec!["Bolt", "Bolt"]
    );
}

#[test]
fn equal_prices_keep_insertion_order() {
    let inv = TestInventory::new();
    inv.add(product(1, "First", 1, 3.0, "S"));
    inv.add(product(2, "Second", 1, 3.0, "S"));
    inv.add(product(3, "Third", 1, 3.0, "S"));

    assert_eq!(
        inv.names(Command::PriceAscending),
        vec!["First", "Second", "Third"]
    );
    assert_eq!(
        inv.names(Command::PriceDescending),
        vec!["Third", "Second", "First"]
    );
    assert_eq!(
        inv.names(Command::FilterExactPrice { price: price(3.0) }),
        vec!["First", "Second", "Third"]
    );
}
