mod cli;
mod tui;

pub(crate) use cli::{as_plain, parse_args, print_usage, Mode};
pub(crate) use tui::as_tui;
