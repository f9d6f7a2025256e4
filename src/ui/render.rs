use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{App, InputMode};
use super::commands;
use super::screens::{form, items};
use super::theme;

/// Rows taken by everything except the item list.
pub(crate) const CHROME_ROWS: u16 = 10;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let area = f.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(3),    // Items
            Constraint::Length(3), // Item + price
            Constraint::Length(3), // Max total
            Constraint::Length(1), // Subtotal
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(area);

    render_title(f, chunks[0]);
    items::render(f, chunks[1], app);
    form::render_item_fields(f, chunks[2], app);
    form::render_budget_field(f, chunks[3], app);
    form::render_subtotal(f, chunks[4], app);
    render_status_bar(f, chunks[5], app);
    render_command_bar(f, chunks[6], app);

    if let Some(ref confirm) = app.confirm {
        render_popup(
            f,
            area,
            confirm.title,
            vec![
                Line::from(Span::styled(&confirm.message, theme::normal_style())),
                Line::from(""),
                Line::from(Span::styled(
                    &confirm.subject,
                    Style::default()
                        .fg(theme::YELLOW)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(vec![
                    Span::styled(" [n] Cancel ", theme::dim_style()),
                    Span::raw("   "),
                    Span::styled(" [y] OK ", Style::default().fg(theme::RED)),
                ]),
            ],
            theme::RED,
        );
    }

    if let Some(ref alert) = app.alert {
        let mut body = vec![Line::from(Span::styled(alert.message, theme::normal_style()))];
        if let Some(ref detail) = alert.detail {
            body.push(Line::from(Span::styled(detail, theme::dim_style())));
        }
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(" Press any key ", theme::dim_style())));
        render_popup(f, area, alert.title, body, theme::YELLOW);
    }

    if app.show_help {
        render_help_overlay(f, area);
    }
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        " Shopping List ",
        theme::title_style(),
    )))
    .centered()
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(title, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Editing | InputMode::Command => theme::GREEN,
        InputMode::Alert => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = match app.input_mode {
        InputMode::Editing => format!(" {} ", app.field.label()),
        _ => format!(" {} items ", app.list.len()),
    };

    let right = match app.input_mode {
        InputMode::Normal => " Space toggle | D delete | Tab fields | ? help ",
        InputMode::Editing => " Enter add | Tab next field | Esc list ",
        InputMode::Command => " Enter run | Esc cancel ",
        InputMode::Confirm => " y confirm | n cancel ",
        InputMode::Alert => " any key to close ",
    };

    let available = area.width as usize;
    let used = mode_label.len() + info.len() + right.len();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let content = if app.input_mode == InputMode::Command {
        Line::from(vec![
            Span::styled(":", Style::default().fg(theme::ACCENT)),
            Span::styled(&app.command_input, theme::command_bar_style()),
        ])
    } else if app.status_message.is_empty() {
        Line::from(Span::styled(
            " Press : for commands, ? for help",
            theme::dim_style(),
        ))
    } else {
        Line::from(Span::styled(
            &app.status_message,
            theme::command_bar_style(),
        ))
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if app.input_mode == InputMode::Command {
        let offset = 1 + app.command_input.chars().count() as u16;
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_popup(f: &mut Frame, area: Rect, title: &str, body: Vec<Line>, color: ratatui::style::Color) {
    let popup_area = centered(area, 52, body.len() as u16 + 2);
    f.render_widget(Clear, popup_area);
    let popup = Paragraph::new(body)
        .centered()
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ))
                .style(Style::default().bg(theme::HEADER_BG)),
        );
    f.render_widget(popup, popup_area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |name: &'static str| {
        Line::from(Span::styled(
            name,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let mut help_text = vec![
        Line::from(Span::styled(
            " ShopList Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" List"),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Space/Enter      Done / not done       D/Del      Delete item",
            theme::normal_style(),
        )),
        Line::from(""),
        section(" Fields"),
        Line::from(Span::styled(
            "  Tab/Shift-Tab    Next/Prev field       Enter      Add item",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Esc              Back to the list      Ctrl-q     Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        section(" Commands"),
    ];

    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<8} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    let popup_area = centered(area, 72, help_text.len() as u16 + 2);
    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
