mod list;
mod models;
mod prompt;
mod run;
mod ui;

use anyhow::Result;

use crate::list::ShoppingList;
use crate::run::Mode;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match run::parse_args(args.get(1..).unwrap_or_default()) {
        Ok(options) => options,
        Err(e) => {
            run::print_usage();
            return Err(e);
        }
    };

    let mut list = ShoppingList::with_budget(options.budget.as_deref().unwrap_or(""));

    match options.mode {
        Mode::Tui => run::as_tui(list),
        Mode::Plain => run::as_plain(&mut list),
        Mode::Help => {
            run::print_usage();
            Ok(())
        }
        Mode::Version => {
            println!("shoplist {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
