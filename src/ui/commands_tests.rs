#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::*;
use crate::list::ShoppingList;
use crate::prompt::Decision;
use crate::ui::app::InputMode;

fn app_with(budget: &str) -> App {
    App::new(ShoppingList::with_budget(budget))
}

// ── Registry ──────────────────────────────────────────────────

#[test]
fn test_registry_has_aliases() {
    for name in ["q", "quit", "a", "add", "m", "t", "toggle", "del", "delete"] {
        assert!(COMMANDS.contains_key(name), "missing :{name}");
    }
    assert!(COMMANDS.contains_key("max"));
}

#[test]
fn test_levenshtein() {
    assert_eq!(levenshtein("add", "add"), 0);
    assert_eq!(levenshtein("ad", "add"), 1);
    assert_eq!(levenshtein("toggel", "toggle"), 2);
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = app_with("");
    handle_command("delet", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :delet. Did you mean :delete?"
    );
}

#[test]
fn test_empty_command_is_ignored() {
    let mut app = app_with("");
    handle_command("   ", &mut app).unwrap();
    assert!(app.status_message.is_empty());
    assert!(app.running);
}

#[test]
fn test_quit() {
    let mut app = app_with("");
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

// ── :add ──────────────────────────────────────────────────────

#[test]
fn test_add_with_spaces_in_name() {
    let mut app = app_with("");
    handle_command("add Orange juice 7.49", &mut app).unwrap();
    let item = &app.list.items()[0];
    assert_eq!(item.text, "Orange juice");
    assert_eq!(item.price, dec!(7.49));
    assert_eq!(app.status_message, "Added: Orange juice - $7.49");
}

#[test]
fn test_add_missing_price_shows_usage() {
    let mut app = app_with("");
    handle_command("add Milk", &mut app).unwrap();
    assert!(app.list.is_empty());
    assert_eq!(app.status_message, "Usage: :add <name> <price>");
}

#[test]
fn test_add_over_budget_raises_alert() {
    let mut app = app_with("15");
    handle_command("add Cheese 10", &mut app).unwrap();
    handle_command("add Wine 10", &mut app).unwrap();
    assert_eq!(app.list.len(), 1);
    assert_eq!(app.input_mode, InputMode::Alert);
    assert_eq!(app.alert.as_ref().unwrap().title, "Limit exceeded");
}

#[test]
fn test_add_negative_price_raises_alert() {
    let mut app = app_with("");
    handle_command("a Milk -1", &mut app).unwrap();
    assert!(app.list.is_empty());
    assert_eq!(app.alert.as_ref().unwrap().title, "Invalid price");
}

// ── :max ──────────────────────────────────────────────────────

#[test]
fn test_max_sets_budget() {
    let mut app = app_with("");
    handle_command("max 150", &mut app).unwrap();
    assert_eq!(app.list.ceiling(), Some(dec!(150)));
    assert_eq!(app.status_message, "Maximum total: $150.00");
}

#[test]
fn test_max_rejects_garbage() {
    let mut app = app_with("20");
    handle_command("max lots", &mut app).unwrap();
    assert_eq!(app.list.ceiling(), Some(dec!(20)));
    assert_eq!(app.status_message, "Invalid amount: lots");
}

#[test]
fn test_max_without_amount_removes_limit() {
    let mut app = app_with("20");
    handle_command("max", &mut app).unwrap();
    assert!(app.list.ceiling().is_none());
}

// ── :toggle / :delete ─────────────────────────────────────────

#[test]
fn test_toggle_by_position() {
    let mut app = app_with("");
    handle_command("add Milk 4", &mut app).unwrap();
    handle_command("add Eggs 6", &mut app).unwrap();
    handle_command("toggle 2", &mut app).unwrap();
    assert!(app.list.items()[1].completed);
    assert_eq!(app.list.subtotal(), dec!(4));
    assert_eq!(app.status_message, "Picked up: Eggs");
}

#[test]
fn test_toggle_bad_position() {
    let mut app = app_with("");
    handle_command("add Milk 4", &mut app).unwrap();
    handle_command("toggle 5", &mut app).unwrap();
    assert!(!app.list.items()[0].completed);
    assert_eq!(app.status_message, "No item number 5");
}

#[test]
fn test_toggle_on_empty_list() {
    let mut app = app_with("");
    handle_command("toggle", &mut app).unwrap();
    assert_eq!(app.status_message, "The list is empty");
}

#[test]
fn test_delete_asks_first() {
    let mut app = app_with("");
    handle_command("add Milk 4", &mut app).unwrap();
    handle_command("delete 1", &mut app).unwrap();
    assert_eq!(app.input_mode, InputMode::Confirm);
    assert_eq!(app.list.len(), 1);

    app.resolve_pending(Decision::Confirm);
    assert!(app.list.is_empty());
    assert_eq!(app.status_message, "Deleted: Milk");
}

// ── :clear ────────────────────────────────────────────────────

#[test]
fn test_clear_keeps_budget() {
    let mut app = app_with("50");
    app.list.form.set_name("Milk");
    app.list.form.set_price("4");
    handle_command("clear", &mut app).unwrap();
    assert_eq!(app.list.form.name(), "");
    assert_eq!(app.list.form.price(), "");
    assert_eq!(app.list.form.budget(), "50");
}
