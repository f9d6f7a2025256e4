use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_amount, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.input_mode == InputMode::Normal;
    let items = app.list.items();
    let done = items.iter().filter(|i| i.completed).count();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused))
        .title(Span::styled(
            format!(" Items ({done}/{}) ", items.len()),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if items.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("Your list is empty", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Type a product and its price below, then press Enter",
                theme::dim_style(),
            )),
        ])
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let rows: Vec<ListItem> = items
        .iter()
        .enumerate()
        .skip(app.item_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, item)| {
            let mark = if item.completed { "[x]" } else { "[ ]" };
            let price = format_amount(item.price);
            let label = format!("{} - {price}", item.text);
            // "nn. [x] " prefix + "  HH:MM" suffix
            let room = inner_width.saturating_sub(8 + 7);
            let label = truncate(&label, room);
            let pad = room.saturating_sub(label.chars().count());

            let row_style = if focused && i == app.item_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            let label_style = if item.completed {
                row_style.patch(theme::completed_style())
            } else {
                row_style
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>2}. {mark} ", i + 1), row_style),
                Span::styled(label, label_style),
                Span::styled(" ".repeat(pad), row_style),
                Span::styled(format!("  {}", item.added_at), row_style.patch(theme::dim_style())),
            ]))
        })
        .collect();

    f.render_widget(List::new(rows).block(block), area);
}
