use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::App;
use crate::list::{parse_amount, FormField};
use crate::ui::util::format_amount;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ShopList", cmd_quit, r);
    register_command!("quit", "Quit ShopList", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add an item (e.g. :add Orange juice 7.49)",
        cmd_add,
        r
    );
    register_command!("a", "Add an item (e.g. :a Milk 4.50)", cmd_add, r);
    register_command!(
        "max",
        "Set the maximum total (e.g. :max 150; no amount removes it)",
        cmd_max,
        r
    );
    register_command!("m", "Set the maximum total", cmd_max, r);
    register_command!(
        "toggle",
        "Mark selected item (or :toggle <n>) done/not done",
        cmd_toggle,
        r
    );
    register_command!("t", "Mark item done/not done", cmd_toggle, r);
    register_command!(
        "delete",
        "Delete selected item (or :delete <n>)",
        cmd_delete,
        r
    );
    register_command!("del", "Delete item", cmd_delete, r);
    register_command!("clear", "Clear the item and price fields", cmd_clear, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if cmd_name.is_empty() {
        return Ok(());
    }

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Resolve the target of :toggle / :delete. An explicit 1-based position
/// wins over the cursor.
fn target_id(args: &str, app: &mut App) -> Option<crate::models::ItemId> {
    if args.is_empty() {
        let id = app.selected_id();
        if id.is_none() {
            app.set_status("The list is empty");
        }
        return id;
    }
    let id = args.parse::<usize>().ok().and_then(|n| app.id_at(n));
    if id.is_none() {
        app.set_status(format!("No item number {args}"));
    }
    id
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App) -> anyhow::Result<()> {
    // Last token is the price, everything before is the name
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        app.set_status("Usage: :add <name> <price>");
        return Ok(());
    }

    app.list.form.set_name(parts[1].trim());
    app.list.form.set_price(parts[0]);
    app.submit_item();
    Ok(())
}

fn cmd_max(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.list.form.clear(FormField::Budget);
        app.set_status("Maximum total removed");
        return Ok(());
    }

    match parse_amount(args) {
        Some(amount) => {
            app.list.form.set_budget(args);
            app.set_status(format!("Maximum total: {}", format_amount(amount)));
        }
        None => app.set_status(format!("Invalid amount: {args}")),
    }
    Ok(())
}

fn cmd_toggle(args: &str, app: &mut App) -> anyhow::Result<()> {
    if let Some(id) = target_id(args, app) {
        app.toggle(id);
    }
    Ok(())
}

fn cmd_delete(args: &str, app: &mut App) -> anyhow::Result<()> {
    if let Some(id) = target_id(args, app) {
        app.request_remove(id);
    }
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.list.form.clear_item_fields();
    app.set_status("Fields cleared");
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
