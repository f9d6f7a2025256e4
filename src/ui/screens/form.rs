use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::list::FormField;
use crate::models::MAX_NAME_LEN;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::format_amount;

/// Item and price inputs side by side.
pub(crate) fn render_item_fields(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(area);

    let count = app.list.form.name().chars().count();
    render_field(
        f,
        chunks[0],
        app,
        FormField::Name,
        "Add a product",
        Some(format!("{count}/{MAX_NAME_LEN}")),
    );
    render_field(f, chunks[1], app, FormField::Price, "0.00", None);
}

pub(crate) fn render_budget_field(f: &mut Frame, area: Rect, app: &App) {
    render_field(f, area, app, FormField::Budget, "no limit", None);
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    app: &App,
    field: FormField,
    placeholder: &str,
    counter: Option<String>,
) {
    let focused = app.input_mode == InputMode::Editing && app.field == field;
    let value = app.list.form.value(field);

    let text = if value.is_empty() {
        Line::from(Span::styled(placeholder, theme::dim_style()))
    } else {
        Line::from(Span::styled(value, theme::normal_style()))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(
            format!(" {} ", field.label()),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));
    if let Some(counter) = counter {
        block = block.title_bottom(Line::from(Span::styled(counter, theme::dim_style())).right_aligned());
    }

    f.render_widget(Paragraph::new(text).block(block), area);

    if focused {
        let offset = value.chars().count() as u16;
        let x = (area.x + 1 + offset).min(area.right().saturating_sub(2));
        f.set_cursor_position((x, area.y + 1));
    }
}

/// Running subtotal, with the remaining headroom when a maximum is set.
pub(crate) fn render_subtotal(f: &mut Frame, area: Rect, app: &App) {
    let subtotal = app.list.subtotal();
    let mut spans = vec![Span::styled(
        format!("Subtotal: {}", format_amount(subtotal)),
        Style::default()
            .fg(theme::TEXT)
            .add_modifier(Modifier::BOLD),
    )];

    if let (Some(ceiling), Some(remaining)) = (app.list.ceiling(), app.list.remaining()) {
        let style = if remaining < rust_decimal::Decimal::ZERO {
            theme::over_budget_style()
        } else {
            theme::under_budget_style()
        };
        spans.push(Span::styled(
            format!("  of {}", format_amount(ceiling)),
            theme::dim_style(),
        ));
        spans.push(Span::styled(
            format!("  ({} left)", format_amount(remaining)),
            style,
        ));
    }
    spans.push(Span::raw(" "));

    f.render_widget(Paragraph::new(Line::from(spans)).right_aligned(), area);
}
