#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

// ── Item ──────────────────────────────────────────────────────

#[test]
fn test_item_new_defaults() {
    let item = Item::new(ItemId(1), "Milk".into(), dec!(4.50));
    assert_eq!(item.id, ItemId(1));
    assert_eq!(item.text, "Milk");
    assert_eq!(item.price, dec!(4.50));
    assert!(!item.completed);
    assert_eq!(item.added_at.len(), 5);
}

#[test]
fn test_item_toggle_flips_completed() {
    let mut item = Item::new(ItemId(1), "Eggs".into(), dec!(3));
    item.toggle();
    assert!(item.completed);
    item.toggle();
    assert!(!item.completed);
}

#[test]
fn test_item_toggle_keeps_other_fields() {
    let mut item = Item::new(ItemId(7), "Bread".into(), dec!(2.25));
    let before = item.clone();
    item.toggle();
    assert_eq!(item.id, before.id);
    assert_eq!(item.text, before.text);
    assert_eq!(item.price, before.price);
    assert_eq!(item.added_at, before.added_at);
}

#[test]
fn test_outstanding_incomplete() {
    let item = Item::new(ItemId(1), "Rice".into(), dec!(12.90));
    assert_eq!(item.outstanding(), dec!(12.90));
}

#[test]
fn test_outstanding_completed_is_zero() {
    let mut item = Item::new(ItemId(1), "Rice".into(), dec!(12.90));
    item.toggle();
    assert_eq!(item.outstanding(), Decimal::ZERO);
}

// ── ItemId ────────────────────────────────────────────────────

#[test]
fn test_item_id_display() {
    assert_eq!(format!("{}", ItemId(42)), "#42");
}

#[test]
fn test_item_id_ordering() {
    assert!(ItemId(1) < ItemId(2));
}
