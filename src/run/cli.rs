use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

use crate::list::{parse_amount, Action, FormField, Outcome, ShoppingList};
use crate::prompt::LinePrompt;
use crate::ui::util::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Mode {
    Tui,
    Plain,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Options {
    pub(crate) mode: Mode,
    /// Initial contents of the maximum-total field.
    pub(crate) budget: Option<String>,
}

/// Parse the arguments after the program name.
pub(crate) fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        mode: Mode::Tui,
        budget: None,
    };

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--max" | "-m" => {
                let value = iter
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("{arg} needs an amount"))?;
                if parse_amount(value).is_none() {
                    anyhow::bail!("Invalid amount for {arg}: {value}");
                }
                options.budget = Some(value.clone());
            }
            "--plain" | "-p" => options.mode = Mode::Plain,
            "--help" | "-h" | "help" => options.mode = Mode::Help,
            "--version" | "-V" | "version" => options.mode = Mode::Version,
            other => anyhow::bail!("Unknown argument: {other}"),
        }
    }

    Ok(options)
}

pub(crate) fn print_usage() {
    println!("ShopList — shopping list with a running subtotal");
    println!();
    println!("Usage: shoplist [options]");
    println!();
    println!("Options:");
    println!("  (none)                        Launch interactive TUI");
    println!("  --max, -m <amount>            Start with a maximum total");
    println!("  --plain, -p                   Line mode on stdin/stdout");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
}

pub(crate) fn as_plain(list: &mut ShoppingList) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();
    run_lines(list, &mut input, &mut output)
}

/// Read commands line by line until `quit` or end of input.
pub(crate) fn run_lines<R: BufRead, W: Write>(
    list: &mut ShoppingList,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "ShopList — type 'help' for commands")?;
    loop {
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("Failed to read input")? == 0 {
            writeln!(output)?;
            break;
        }

        let trimmed = line.trim();
        let mut parts = trimmed.splitn(2, ' ');
        let cmd = parts.next().unwrap_or("");
        let args = parts.next().unwrap_or("").trim();

        match cmd {
            "" => {}
            "add" | "a" => line_add(args, list, output)?,
            "max" | "m" => line_max(args, list, output)?,
            "toggle" | "t" => match position(args, list) {
                Some(id) => {
                    if let Ok(Outcome::Toggled { completed, .. }) = list.apply(Action::Toggle(id)) {
                        let state = if completed { "done" } else { "not done" };
                        writeln!(output, "Marked {state}")?;
                    }
                }
                None => writeln!(output, "No item number {args}")?,
            },
            "delete" | "del" | "rm" => match position(args, list) {
                Some(id) => {
                    let mut prompt = LinePrompt::new(&mut *input, &mut *output);
                    match list.request_removal(id, &mut prompt)? {
                        Outcome::Removed(item) => writeln!(output, "Deleted: {}", item.text)?,
                        Outcome::Kept => writeln!(output, "Cancelled")?,
                        _ => {}
                    }
                }
                None => writeln!(output, "No item number {args}")?,
            },
            "list" | "ls" => print_list(list, output)?,
            "help" | "h" | "?" => print_line_help(output)?,
            "quit" | "q" | "exit" => break,
            other => writeln!(output, "Unknown command: {other}. Type 'help'")?,
        }
    }
    Ok(())
}

fn position(args: &str, list: &ShoppingList) -> Option<crate::models::ItemId> {
    args.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| list.items().get(i))
        .map(|i| i.id)
}

fn line_add<W: Write>(args: &str, list: &mut ShoppingList, output: &mut W) -> Result<()> {
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        writeln!(output, "Usage: add <name> <price>")?;
        return Ok(());
    }
    list.form.set_name(parts[1].trim());
    list.form.set_price(parts[0]);

    match list.apply(Action::Add) {
        Ok(Outcome::Added(id)) => {
            if let Some(item) = list.get(id) {
                writeln!(output, "Added: {} - {}", item.text, format_amount(item.price))?;
            }
            writeln!(output, "Subtotal: {}", format_amount(list.subtotal()))?;
        }
        Ok(_) => {}
        Err(err) => {
            // the line form is single-shot, don't carry a rejected entry over
            list.form.clear_item_fields();
            writeln!(output, "{err}")?;
            if let Some(detail) = err.detail() {
                writeln!(output, "  {detail}")?;
            }
        }
    }
    Ok(())
}

fn line_max<W: Write>(args: &str, list: &mut ShoppingList, output: &mut W) -> Result<()> {
    if args.is_empty() {
        list.form.clear(FormField::Budget);
        writeln!(output, "Maximum total removed")?;
    } else if let Some(amount) = parse_amount(args) {
        list.form.set_budget(args);
        writeln!(output, "Maximum total: {}", format_amount(amount))?;
    } else {
        writeln!(output, "Invalid amount: {args}")?;
    }
    Ok(())
}

fn print_list<W: Write>(list: &ShoppingList, output: &mut W) -> Result<()> {
    if list.is_empty() {
        writeln!(output, "The list is empty")?;
    }
    for (i, item) in list.items().iter().enumerate() {
        let mark = if item.completed { "x" } else { " " };
        writeln!(
            output,
            "{:>2}. [{mark}] {} - {}",
            i + 1,
            item.text,
            format_amount(item.price)
        )?;
    }
    write!(output, "Subtotal: {}", format_amount(list.subtotal()))?;
    if let (Some(ceiling), Some(remaining)) = (list.ceiling(), list.remaining()) {
        write!(
            output,
            " of {} ({} left)",
            format_amount(ceiling),
            format_amount(remaining)
        )?;
    }
    writeln!(output)?;
    Ok(())
}

fn print_line_help<W: Write>(output: &mut W) -> Result<()> {
    writeln!(output, "  add <name> <price>   Add an item")?;
    writeln!(output, "  max [amount]         Set or remove the maximum total")?;
    writeln!(output, "  toggle <n>           Mark item n done/not done")?;
    writeln!(output, "  delete <n>           Delete item n (asks first)")?;
    writeln!(output, "  list                 Show the list and subtotal")?;
    writeln!(output, "  quit                 Leave")?;
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
