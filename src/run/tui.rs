use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::list::{FormField, ShoppingList};
use crate::prompt::Decision;
use crate::ui::app::{App, InputMode};
use crate::ui::commands;
use crate::ui::render::CHROME_ROWS;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(list: ShoppingList) -> Result<()> {
    let mut app = App::new(list);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // list rows left after the fixed bars and the list borders
            let content_height = f.area().height.saturating_sub(CHROME_ROWS + 2) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(key, app)?;
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_key(key: event::KeyEvent, app: &mut App) -> Result<()> {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return Ok(());
    }
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }
    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app)?,
        InputMode::Editing => handle_editing_input(key, app),
        InputMode::Command => handle_command_input(key, app)?,
        InputMode::Confirm => handle_confirm_input(key, app),
        InputMode::Alert => app.dismiss_alert(),
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('j') | KeyCode::Down => {
            scroll_down(
                &mut app.item_index,
                &mut app.item_scroll,
                app.list.len(),
                app.visible_rows,
            );
        }
        KeyCode::Char('k') | KeyCode::Up => scroll_up(&mut app.item_index, &mut app.item_scroll),
        KeyCode::Char('g') | KeyCode::Home => {
            scroll_to_top(&mut app.item_index, &mut app.item_scroll);
        }
        KeyCode::Char('G') | KeyCode::End => {
            scroll_to_bottom(
                &mut app.item_index,
                &mut app.item_scroll,
                app.list.len(),
                app.visible_rows,
            );
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = app.selected_id() {
                app.toggle(id);
            }
        }
        KeyCode::Char('D') | KeyCode::Delete => {
            if let Some(id) = app.selected_id() {
                app.request_remove(id);
            }
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.focus_field(FormField::Name),
        KeyCode::BackTab => app.focus_field(FormField::Budget),
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('q') => {
            commands::handle_command("quit", app)?;
        }
        _ => {}
    }
    Ok(())
}

fn handle_editing_input(key: event::KeyEvent, app: &mut App) {
    let field = app.field;
    match key.code {
        KeyCode::Enter => app.submit_item(),
        KeyCode::Esc => app.focus_list(),
        KeyCode::Tab => match field {
            FormField::Name => app.focus_field(FormField::Price),
            FormField::Price => app.focus_field(FormField::Budget),
            FormField::Budget => app.focus_list(),
        },
        KeyCode::BackTab => match field {
            FormField::Name => app.focus_list(),
            FormField::Price => app.focus_field(FormField::Name),
            FormField::Budget => app.focus_field(FormField::Price),
        },
        KeyCode::Backspace => app.list.form.pop(field),
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.list.form.clear(field);
        }
        KeyCode::Char(c) => {
            if !app.list.form.push(field, c) && field == FormField::Name {
                app.set_status("Names are limited to 25 characters");
            }
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_confirm_input(key: event::KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.resolve_pending(Decision::Confirm);
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.resolve_pending(Decision::Cancel);
        }
        _ => {}
    }
}

#[cfg(test)]
#[path = "tui_tests.rs"]
mod tui_tests;
