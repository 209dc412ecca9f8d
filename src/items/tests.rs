//! Unit tests for the inventory.

use super::{Inventory, ItemKind};

#[test]
fn empty_inventory_counts_zero() {
    let inventory = Inventory::default();
    assert_eq!(inventory.count(ItemKind::Gem), 0);
    assert_eq!(inventory.total(), 0);
}

#[test]
fn add_accumulates_per_kind() {
    let mut inventory = Inventory::default();
    inventory.add(ItemKind::Gem);
    inventory.add(ItemKind::Gem);
    inventory.add(ItemKind::Key);
    assert_eq!(inventory.count(ItemKind::Gem), 2);
    assert_eq!(inventory.count(ItemKind::Key), 1);
    assert_eq!(inventory.total(), 3);
}

#[test]
fn clear_empties_everything() {
    let mut inventory = Inventory::default();
    inventory.add(ItemKind::Gem);
    inventory.clear();
    assert_eq!(inventory.total(), 0);
}

#[test]
fn listing_order_covers_every_kind() {
    for kind in ItemKind::ALL {
        // A match here keeps ALL in sync with the enum
        match kind {
            ItemKind::Gem | ItemKind::Key | ItemKind::Heart => {}
        }
    }
    assert_eq!(ItemKind::ALL.len(), 3);
}
