//! The executor shared across threads.
//!
//! Writers add and reprice products while readers take price-ordered
//! snapshots. Each snapshot must be internally consistent: sorted, with
//! every product present exactly once.

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use crate::common::*;
use stockroom::{Command, ProductId};

const WRITERS: i64 = 4;
const PER_WRITER: i64 = 50;

#[test]
fn readers_never_see_a_partial_update() {
    let inv = TestInventory::new();
    let executor = Arc::new(inv.executor);

    let writers: Vec<_> = (0..WRITERS)
        .map(|w| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for i in 0..PER_WRITER {
                    let id = w * PER_WRITER + i;
                    executor
                        .execute(Command::AddProduct {
                            product: product(id, &format!("item-{}", id), 1, (i % 7) as f64, "S"),
                        })
                        .unwrap();
                    executor
                        .execute(Command::UpdatePrice {
                            id: ProductId::new(id),
                            price: price(((i * 13) % 11) as f64),
                        })
                        .unwrap();
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..2)
        .map(|_| {
            let executor = Arc::clone(&executor);
            thread::spawn(move || {
                for _ in 0..100 {
                    let asc = executor.execute(Command::PriceAscending).unwrap();
                    let ps = asc.products();
                    assert!(ps.windows(2).all(|w| w[0].price <= w[1].price));
                    let ids: HashSet<ProductId> = ps.iter().map(|p| p.id).collect();
                    assert_eq!(ids.len(), ps.len());
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().unwrap();
    }

    assert_eq!(executor.len(), (WRITERS * PER_WRITER) as usize);
    let all = executor.execute(Command::ListAll).unwrap();
    assert_eq!(all.products().len(), (WRITERS * PER_WRITER) as usize);
}
