#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::io::Cursor;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn session(list: &mut ShoppingList, script: &str) -> String {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output: Vec<u8> = Vec::new();
    run_lines(list, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

// ── parse_args ────────────────────────────────────────────────

#[test]
fn test_no_args_is_tui() {
    let opts = parse_args(&[]).unwrap();
    assert_eq!(opts.mode, Mode::Tui);
    assert!(opts.budget.is_none());
}

#[test]
fn test_max_flag() {
    let opts = parse_args(&args(&["--max", "150"])).unwrap();
    assert_eq!(opts.budget.as_deref(), Some("150"));

    let opts = parse_args(&args(&["-p", "-m", "99,90"])).unwrap();
    assert_eq!(opts.mode, Mode::Plain);
    assert_eq!(opts.budget.as_deref(), Some("99,90"));
}

#[test]
fn test_max_flag_needs_valid_amount() {
    assert!(parse_args(&args(&["--max"])).is_err());
    assert!(parse_args(&args(&["--max", "lots"])).is_err());
}

#[test]
fn test_help_and_version() {
    assert_eq!(parse_args(&args(&["-h"])).unwrap().mode, Mode::Help);
    assert_eq!(parse_args(&args(&["--version"])).unwrap().mode, Mode::Version);
}

#[test]
fn test_unknown_argument() {
    let err = parse_args(&args(&["--frobnicate"])).unwrap_err();
    assert_eq!(err.to_string(), "Unknown argument: --frobnicate");
}

// ── Line mode ─────────────────────────────────────────────────

#[test]
fn test_line_add_and_list() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "add Orange juice 7.49\nadd Milk 4\nlist\n");
    assert!(out.contains("Added: Orange juice - $7.49"));
    assert!(out.contains(" 2. [ ] Milk - $4.00"));
    assert!(out.contains("Subtotal: $11.49"));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_line_budget_scenario() {
    let mut list = ShoppingList::with_budget("15");
    let out = session(&mut list, "add Cheese 10\nadd Wine 10\nadd Bread 4\nlist\n");
    assert!(out.contains("Limit exceeded: The items add up to more than the maximum allowed."));
    assert!(out.contains("Subtotal: $14.00 of $15.00 ($1.00 left)"));
    assert_eq!(list.len(), 2);
}

#[test]
fn test_line_rejections() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "add Milk -1\nadd Milk abc\nadd Milk 4\nadd Milk 2\n");
    assert_eq!(out.matches("Invalid price").count(), 2);
    assert!(out.contains("Heads up: That item is already on the list!"));
    assert_eq!(list.len(), 1);
    assert_eq!(list.items()[0].price, dec!(4));
}

#[test]
fn test_line_toggle() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "add Milk 4\ntoggle 1\ntoggle 9\n");
    assert!(out.contains("Marked done"));
    assert!(out.contains("No item number 9"));
    assert!(list.items()[0].completed);
    assert_eq!(list.subtotal(), dec!(0));
}

#[test]
fn test_line_delete_confirmed() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "add Milk 4\ndelete 1\ny\n");
    assert!(out.contains("Delete item: Milk - $4.00"));
    assert!(out.contains("Deleted: Milk"));
    assert!(list.is_empty());
}

#[test]
fn test_line_delete_cancelled() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "add Milk 4\ndelete 1\nn\n");
    assert!(out.contains("Cancelled"));
    assert_eq!(list.len(), 1);
}

#[test]
fn test_line_max() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "max 20\nmax nope\n");
    assert!(out.contains("Maximum total: $20.00"));
    assert!(out.contains("Invalid amount: nope"));
    assert_eq!(list.ceiling(), Some(dec!(20)));

    session(&mut list, "max\n");
    assert!(list.ceiling().is_none());
}

#[test]
fn test_line_quit_stops_reading() {
    let mut list = ShoppingList::new();
    session(&mut list, "quit\nadd Milk 4\n");
    assert!(list.is_empty());
}

#[test]
fn test_line_unknown_command() {
    let mut list = ShoppingList::new();
    let out = session(&mut list, "buy milk\n");
    assert!(out.contains("Unknown command: buy. Type 'help'"));
}

#[test]
fn test_line_limit_detail() {
    let mut list = ShoppingList::with_budget("15");
    let out = session(&mut list, "add Cheese 10\nadd Wine 10\n");
    assert!(out.contains("  $10.00 + $10.00 is over $15.00"));
}
