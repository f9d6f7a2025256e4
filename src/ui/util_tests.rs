#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::util::*;

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_item_price() {
    assert_eq!(format_amount(dec!(4.5)), "$4.50");
    assert_eq!(format_amount(dec!(0)), "$0.00");
}

#[test]
fn test_format_amount_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "$1,234.56");
}

#[test]
fn test_format_amount_overdrawn_headroom() {
    assert_eq!(format_amount(dec!(-30)), "-$30.00");
}

#[test]
fn test_format_amount_midpoint_rounds_away_from_zero() {
    assert_eq!(format_amount(dec!(0.125)), "$0.13");
    assert_eq!(format_amount(dec!(2.345)), "$2.35");
    assert_eq!(format_amount(dec!(-0.125)), "-$0.13");
}

#[test]
fn test_format_amount_largest_decimal() {
    assert_eq!(
        format_amount(Decimal::MAX),
        "$79,228,162,514,264,337,593,543,950,335.00"
    );
}

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_item_label_fits() {
    assert_eq!(truncate("Milk - $4.00", 20), "Milk - $4.00");
}

#[test]
fn test_truncate_item_label_in_narrow_terminal() {
    assert_eq!(truncate("Orange juice - $7.49", 10), "Orange ju…");
}

#[test]
fn test_truncate_accented_name() {
    assert_eq!(truncate("pão de queijo - $9.90", 4), "pão…");
}

// ── cursor over the item list ─────────────────────────────────

#[test]
fn test_cursor_walks_a_long_list() {
    // 12 items, 5 visible rows
    let (mut index, mut scroll) = (0, 0);
    for _ in 0..6 {
        scroll_down(&mut index, &mut scroll, 12, 5);
    }
    assert_eq!((index, scroll), (6, 2));

    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    scroll_up(&mut index, &mut scroll);
    assert_eq!((index, scroll), (1, 1));
}

#[test]
fn test_cursor_jumps_to_last_added_and_back() {
    let (mut index, mut scroll) = (0, 0);
    scroll_to_bottom(&mut index, &mut scroll, 12, 5);
    assert_eq!((index, scroll), (11, 7));
    scroll_to_top(&mut index, &mut scroll);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_cursor_on_empty_list_stays_put() {
    let (mut index, mut scroll) = (0, 0);
    scroll_down(&mut index, &mut scroll, 0, 5);
    scroll_to_bottom(&mut index, &mut scroll, 0, 5);
    assert_eq!((index, scroll), (0, 0));
}

#[test]
fn test_clamp_after_removing_last_item() {
    // cursor on item 3 of 3, item removed
    let (mut index, mut scroll) = (2, 0);
    clamp_cursor(&mut index, &mut scroll, 2);
    assert_eq!((index, scroll), (1, 0));
}

#[test]
fn test_clamp_after_removing_middle_item_keeps_position() {
    let (mut index, mut scroll) = (1, 0);
    clamp_cursor(&mut index, &mut scroll, 2);
    assert_eq!((index, scroll), (1, 0));
}

#[test]
fn test_clamp_pulls_scroll_back_when_list_shrinks() {
    let (mut index, mut scroll) = (9, 6);
    clamp_cursor(&mut index, &mut scroll, 4);
    assert_eq!((index, scroll), (3, 3));
}

#[test]
fn test_clamp_after_removing_only_item() {
    let (mut index, mut scroll) = (0, 0);
    clamp_cursor(&mut index, &mut scroll, 0);
    assert_eq!((index, scroll), (0, 0));
}
